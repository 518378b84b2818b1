use std::path::PathBuf;
use thiserror::Error;

/// Errors from harness configuration and report output.
///
/// Test failures are never errors; they are recorded on the harness.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration validation failure.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
