//! Error types for padmap-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in padmap-core
///
/// Every variant is fatal for a generation run. Unknown headers, orphan data
/// lines and duplicate keys are handled in place and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// An input database could not be opened or read
    #[error("failed to read mapping database '{path}': {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary artifact next to the destination could not be created
    #[error("failed to create output for '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished artifact could not be moved into place
    #[error("failed to commit output '{path}': {source}")]
    OutputPersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run summary could not be written
    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing generated text
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
