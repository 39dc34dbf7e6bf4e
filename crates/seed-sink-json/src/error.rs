//! Error types for the JSON sink.

use thiserror::Error;

/// Errors that can occur while writing the JSON output file.
#[derive(Error, Debug)]
pub enum JsonSinkError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
