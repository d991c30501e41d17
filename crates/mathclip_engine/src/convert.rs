use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter executable does not exist on this system. There is no
    /// fallback converter, so this ends the whole run.
    #[error("converter executable not found: {program}")]
    MissingTool {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The converter ran and rejected the input.
    #[error("converter reported failure: {stderr}")]
    Failed { stderr: String },
    #[error("io error talking to converter: {0}")]
    Io(#[from] io::Error),
}

impl ConvertError {
    /// True for errors that no amount of further polling can recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConvertError::MissingTool { .. })
    }
}

pub trait Converter: Send + Sync {
    fn convert(&self, latex: &str) -> Result<String, ConvertError>;
}

/// Converts LaTeX to Typst by piping text through a Pandoc process, one
/// spawn per conversion.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: PathBuf,
}

impl PandocConverter {
    pub fn new() -> Self {
        Self::with_program("pandoc")
    }

    /// Uses an alternative executable, e.g. a pinned Pandoc outside PATH.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs `--version` once so a missing installation surfaces at startup
    /// rather than on the first clipboard hit.
    pub fn probe(&self) -> Result<(), ConvertError> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|err| self.classify_spawn_error(err))?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                stderr: stderr_message(&output.stderr),
            });
        }
        Ok(())
    }

    fn classify_spawn_error(&self, err: io::Error) -> ConvertError {
        if err.kind() == io::ErrorKind::NotFound {
            ConvertError::MissingTool {
                program: self.program.display().to_string(),
                source: err,
            }
        } else {
            ConvertError::Io(err)
        }
    }
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for PandocConverter {
    fn convert(&self, latex: &str) -> Result<String, ConvertError> {
        let mut child = Command::new(&self.program)
            .args(["-f", "latex", "-t", "typst"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| self.classify_spawn_error(err))?;

        if let Some(ref mut stdin) = child.stdin {
            stdin.write_all(latex.as_bytes())?;
        }

        // wait_with_output closes stdin first, so the child sees EOF.
        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                stderr: stderr_message(&output.stderr),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn stderr_message(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "no diagnostics on stderr".to_string()
    } else {
        trimmed.to_string()
    }
}
