use thiserror::Error;

/// Clipboard access failed. Every instance is retryable; the watch loop
/// backs off and samples again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard access failed: {0}")]
pub struct ClipboardError(pub String);

pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|err| ClipboardError(err.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // An image or an empty clipboard is an empty sample, not a
            // failure worth backing off over.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(err) => Err(ClipboardError(err.to_string())),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|err| ClipboardError(err.to_string()))
    }
}
