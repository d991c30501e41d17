#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the detection and conversion pipeline over freshly observed text.
    Process { text: String },
    /// Write converted markup to the clipboard. `original` is the snippet it
    /// replaces, kept so a failed write can still be marked as handled.
    Write { text: String, original: String },
}
