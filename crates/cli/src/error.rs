//! CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: sketch error (unknown preset, bad dimensions, step failure)
//! - 11: snapshot write failure
//! - 12: input error (bad --params JSON, malformed --resize spec)
//! - 13: JSON output encoding failure

use lumina_core::SketchError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error from scene construction or stepping.
    #[error(transparent)]
    Sketch(#[from] SketchError),

    /// Writing the output PNG failed.
    #[error("failed to write {}: {message}", path.display())]
    Snapshot { path: PathBuf, message: String },

    /// The `--params` argument was not a valid JSON object.
    #[error("invalid --params JSON: {0}")]
    Params(serde_json::Error),

    /// The `--resize` argument did not match WIDTHxHEIGHT@FRAME.
    #[error("invalid --resize \"{0}\", expected WIDTHxHEIGHT@FRAME")]
    Resize(String),

    /// Encoding the `--json` output failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sketch(_) => 10,
            CliError::Snapshot { .. } => 11,
            CliError::Params(_) | CliError::Resize(_) => 12,
            CliError::Json(_) => 13,
        }
    }
}
