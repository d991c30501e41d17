#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial clipboard snapshot taken at startup; remembered, never processed.
    Primed(String),
    /// Clipboard contents observed on a poll tick.
    Sampled(String),
    /// The pipeline looked at a snippet and decided it is not math.
    Skipped { original: String },
    /// Conversion produced Typst markup for a snippet.
    Converted { original: String, output: String },
    /// Conversion ran and failed; the snippet must not be retried.
    ConvertFailed { original: String },
    /// Converted markup reached the clipboard.
    Copied { text: String },
    /// Writing converted markup back to the clipboard failed.
    CopyFailed { original: String },
}
