#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchState {
    last_seen: String,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clipboard text the watcher has already dealt with.
    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    pub(crate) fn remember(&mut self, text: String) {
        self.last_seen = text;
    }
}
