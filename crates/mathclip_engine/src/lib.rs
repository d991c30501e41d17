//! Mathclip engine: detection heuristics, conversion pipeline and the
//! clipboard watch loop.
mod cleanup;
mod clipboard;
mod convert;
mod delimit;
mod detect;
mod preview;
mod watcher;

pub use cleanup::clean_typst_output;
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use convert::{ConvertError, Converter, PandocConverter};
pub use delimit::{ensure_math_delimiters, NormalizedMath};
pub use detect::is_likely_latex;
pub use watcher::{watch_clipboard, WatchSettings};
