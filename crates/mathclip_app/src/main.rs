//! Clipboard watcher binary: LaTeX math in, Typst markup out.

mod logging;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mathclip_engine::{PandocConverter, SystemClipboard, WatchSettings};
use watch_logging::{watch_error, watch_info, watch_warn};

use crate::logging::LogDestination;

/// Command-line arguments for mathclip.
#[derive(Parser, Debug)]
#[command(name = "mathclip")]
#[command(version, about = "Watches the clipboard and converts LaTeX math to Typst")]
struct Args {
    /// Clipboard poll interval in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,

    /// Converter executable to invoke
    #[arg(long, default_value = "pandoc")]
    pandoc: PathBuf,

    /// Also write logs to ./mathclip.log
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let destination = if args.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    logging::initialize(destination);

    let converter = PandocConverter::with_program(&args.pandoc);
    if let Err(err) = converter.probe() {
        watch_error!("converter '{}' is not usable: {}", args.pandoc.display(), err);
        watch_error!("install Pandoc or point --pandoc at a working executable");
        return Err(err).context("converter probe failed");
    }

    let stop = Arc::new(AtomicBool::new(false));
    spawn_signal_listener(stop.clone());

    let settings = WatchSettings {
        poll_interval: Duration::from_millis(args.interval_ms),
        ..WatchSettings::default()
    };

    watch_info!("mathclip is running");
    watch_info!("polling the clipboard every {:?}", settings.poll_interval);
    watch_info!("only content recognized as LaTeX is converted");
    watch_info!("press Ctrl-C to stop");

    let Some(mut clipboard) = open_clipboard(&settings, &stop) else {
        watch_info!("stopped before the clipboard became available");
        return Ok(());
    };

    mathclip_engine::watch_clipboard(&settings, &mut clipboard, &converter, &stop)
        .context("clipboard watch ended with a fatal converter error")?;
    Ok(())
}

/// Waits for Ctrl-C on a helper thread and raises the stop flag.
fn spawn_signal_listener(stop: Arc<AtomicBool>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
        if let Err(err) = runtime.block_on(tokio::signal::ctrl_c()) {
            // The default interrupt disposition still applies in this case.
            watch_warn!("could not listen for Ctrl-C: {}", err);
            return;
        }
        watch_info!("stop requested, finishing the current tick");
        stop.store(true, Ordering::Relaxed);
    });
}

/// Opens the system clipboard, retrying with backoff until it is available
/// or a stop is requested. Access problems are never treated as fatal.
fn open_clipboard(settings: &WatchSettings, stop: &AtomicBool) -> Option<SystemClipboard> {
    let retry_delay = settings.poll_interval * settings.clipboard_backoff;
    while !stop.load(Ordering::Relaxed) {
        match SystemClipboard::new() {
            Ok(clipboard) => return Some(clipboard),
            Err(err) => {
                watch_warn!("clipboard unavailable: {}; retrying in {:?}", err, retry_delay);
                wait_with_stop(retry_delay, stop);
            }
        }
    }
    None
}

fn wait_with_stop(total: Duration, stop: &AtomicBool) {
    let slice = Duration::from_millis(100);
    let mut remaining = total;
    while !stop.load(Ordering::Relaxed) && !remaining.is_zero() {
        let chunk = remaining.min(slice);
        thread::sleep(chunk);
        remaining = remaining.saturating_sub(chunk);
    }
}
