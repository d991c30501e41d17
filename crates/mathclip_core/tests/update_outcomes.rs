use std::sync::Once;

use mathclip_core::{update, Effect, Msg, WatchState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(watch_logging::initialize_for_tests);
}

fn sample(state: WatchState, text: &str) -> (WatchState, Vec<Effect>) {
    update(state, Msg::Sampled(text.to_string()))
}

#[test]
fn skipped_snippet_is_not_reprocessed() {
    init_logging();
    let state = WatchState::new();
    let (state, _effects) = sample(state, "plain english prose");

    let (state, effects) = update(
        state,
        Msg::Skipped {
            original: "plain english prose".to_string(),
        },
    );
    assert!(effects.is_empty());

    let (_state, effects) = sample(state, "plain english prose");
    assert!(effects.is_empty());
}

#[test]
fn converted_snippet_requests_write() {
    init_logging();
    let state = WatchState::new();
    let (state, _effects) = sample(state, "\\alpha + \\beta");

    let (state, effects) = update(
        state,
        Msg::Converted {
            original: "\\alpha + \\beta".to_string(),
            output: "alpha + beta".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Write {
            text: "alpha + beta".to_string(),
            original: "\\alpha + \\beta".to_string(),
        }]
    );
    // Not handled yet; the write outcome settles it.
    assert_eq!(state.last_seen(), "");
}

#[test]
fn copied_output_becomes_last_seen() {
    init_logging();
    let state = WatchState::new();
    let (state, _effects) = sample(state, "\\alpha");

    let (state, effects) = update(
        state,
        Msg::Copied {
            text: "alpha".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.last_seen(), "alpha");

    // The watcher's own output sits on the clipboard now; seeing it again
    // must not start another conversion.
    let (_state, effects) = sample(state, "alpha");
    assert!(effects.is_empty());
}

#[test]
fn failed_conversion_marks_snippet_seen() {
    init_logging();
    let state = WatchState::new();
    let (state, _effects) = sample(state, "\\badmacro{");

    let (state, effects) = update(
        state,
        Msg::ConvertFailed {
            original: "\\badmacro{".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.last_seen(), "\\badmacro{");

    let (_state, effects) = sample(state, "\\badmacro{");
    assert!(effects.is_empty());
}

#[test]
fn failed_copy_falls_back_to_original() {
    init_logging();
    let state = WatchState::new();
    let (state, _effects) = sample(state, "\\alpha");

    let (state, effects) = update(
        state,
        Msg::CopyFailed {
            original: "\\alpha".to_string(),
        },
    );
    assert!(effects.is_empty());
    // The conversion result never reached the clipboard, so the original
    // snippet is what the watcher has dealt with.
    assert_eq!(state.last_seen(), "\\alpha");
}

#[test]
fn replacing_a_skipped_snippet_processes_the_new_one() {
    init_logging();
    let state = WatchState::new();
    let (state, _effects) = sample(state, "groceries list");
    let (state, _effects) = update(
        state,
        Msg::Skipped {
            original: "groceries list".to_string(),
        },
    );

    let (_state, effects) = sample(state, "\\sum_{i=0}^n i");

    assert_eq!(
        effects,
        vec![Effect::Process {
            text: "\\sum_{i=0}^n i".to_string(),
        }]
    );
}
