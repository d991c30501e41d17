use crate::{Effect, Msg, WatchState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WatchState, msg: Msg) -> (WatchState, Vec<Effect>) {
    let effects = match msg {
        Msg::Primed(text) => {
            state.remember(text);
            Vec::new()
        }
        Msg::Sampled(text) => {
            if text == state.last_seen() {
                Vec::new()
            } else if text.is_empty() {
                // The clipboard was cleared or holds non-text content. Remember
                // the empty sample so the next real snippet counts as new.
                state.remember(text);
                Vec::new()
            } else {
                // Last-seen stays untouched until a pipeline outcome arrives;
                // the outcome message decides what counts as handled.
                vec![Effect::Process { text }]
            }
        }
        Msg::Skipped { original }
        | Msg::ConvertFailed { original }
        | Msg::CopyFailed { original } => {
            // Marking the snippet as seen stops the watcher from retrying it
            // on every following tick.
            state.remember(original);
            Vec::new()
        }
        Msg::Converted { original, output } => {
            vec![Effect::Write {
                text: output,
                original,
            }]
        }
        Msg::Copied { text } => {
            // Our own write lands on the clipboard; remembering it prevents
            // the converted output from being picked up as a new snippet.
            state.remember(text);
            Vec::new()
        }
    };

    (state, effects)
}
