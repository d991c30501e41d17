use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use mathclip_core::{update, Effect, Msg, WatchState};
use watch_logging::{watch_error, watch_info, watch_warn};

use crate::cleanup::clean_typst_output;
use crate::clipboard::Clipboard;
use crate::convert::{ConvertError, Converter};
use crate::delimit::ensure_math_delimiters;
use crate::detect::is_likely_latex;
use crate::preview::{preview, INPUT_PREVIEW_CHARS, OUTPUT_PREVIEW_CHARS};

/// How long a stop request may go unnoticed while sleeping.
const STOP_CHECK_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct WatchSettings {
    pub poll_interval: Duration,
    /// Multiplier applied to the poll interval while the clipboard is
    /// unreachable.
    pub clipboard_backoff: u32,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
            clipboard_backoff: 5,
        }
    }
}

/// Polls the clipboard until `stop` is set, feeding new text through
/// detection, conversion and cleanup, and writing results back.
///
/// Clipboard failures back off and retry; conversion failures are reported
/// and polling continues. Only a missing converter executable ends the run.
pub fn watch_clipboard(
    settings: &WatchSettings,
    clipboard: &mut dyn Clipboard,
    converter: &dyn Converter,
    stop: &AtomicBool,
) -> Result<(), ConvertError> {
    let mut state = WatchState::new();

    // Whatever sits on the clipboard at startup was not copied for us.
    match clipboard.read_text() {
        Ok(initial) => {
            let (primed, _) = update(state, Msg::Primed(initial));
            state = primed;
        }
        Err(err) => {
            watch_warn!("could not read initial clipboard contents: {}", err);
        }
    }

    while !stop.load(Ordering::Relaxed) {
        let sampled = match clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                watch_warn!(
                    "clipboard unavailable: {}; retrying in {:?}",
                    err,
                    settings.poll_interval * settings.clipboard_backoff
                );
                sleep_unless_stopped(settings.poll_interval * settings.clipboard_backoff, stop);
                continue;
            }
        };

        let (next, effects) = update(state, Msg::Sampled(sampled));
        state = run_effects(next, effects, clipboard, converter)?;

        sleep_unless_stopped(settings.poll_interval, stop);
    }

    watch_info!("clipboard watch stopped");
    Ok(())
}

/// Executes effects in order, feeding each outcome back through `update`
/// until the cascade settles.
fn run_effects(
    mut state: WatchState,
    effects: Vec<Effect>,
    clipboard: &mut dyn Clipboard,
    converter: &dyn Converter,
) -> Result<WatchState, ConvertError> {
    let mut pending: VecDeque<Effect> = effects.into();
    while let Some(effect) = pending.pop_front() {
        let msg = match effect {
            Effect::Process { text } => process(text, converter)?,
            Effect::Write { text, original } => write_back(text, original, clipboard),
        };
        let (next, more) = update(state, msg);
        state = next;
        pending.extend(more);
    }
    Ok(state)
}

/// Runs one snippet through the pipeline stages. Non-fatal conversion
/// failures come back as an outcome message; a missing tool escapes.
fn process(text: String, converter: &dyn Converter) -> Result<Msg, ConvertError> {
    watch_info!(
        "new clipboard content: '{}'",
        preview(&text, INPUT_PREVIEW_CHARS)
    );

    if !is_likely_latex(&text) {
        watch_info!("not recognized as LaTeX, skipping conversion");
        return Ok(Msg::Skipped { original: text });
    }

    watch_info!("recognized as likely LaTeX, converting");
    let normalized = ensure_math_delimiters(&text);
    match converter.convert(&normalized.text) {
        Ok(output) => {
            let cleaned = clean_typst_output(&output, normalized.wrapped);
            Ok(Msg::Converted {
                original: text,
                output: cleaned,
            })
        }
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            watch_error!("conversion failed: {}", err);
            Ok(Msg::ConvertFailed { original: text })
        }
    }
}

fn write_back(text: String, original: String, clipboard: &mut dyn Clipboard) -> Msg {
    match clipboard.write_text(&text) {
        Ok(()) => {
            watch_info!(
                "typst output copied to clipboard: '{}'",
                preview(&text, OUTPUT_PREVIEW_CHARS)
            );
            Msg::Copied { text }
        }
        Err(err) => {
            watch_warn!("could not copy converted text to clipboard: {}", err);
            Msg::CopyFailed { original }
        }
    }
}

fn sleep_unless_stopped(total: Duration, stop: &AtomicBool) {
    let mut remaining = total;
    while !stop.load(Ordering::Relaxed) && !remaining.is_zero() {
        let slice = remaining.min(STOP_CHECK_SLICE);
        thread::sleep(slice);
        remaining = remaining.saturating_sub(slice);
    }
}
