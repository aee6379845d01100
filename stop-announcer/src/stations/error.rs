//! Station source error types.

use std::path::PathBuf;

/// Errors that can occur when reading a station list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Reading the file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON station list could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
