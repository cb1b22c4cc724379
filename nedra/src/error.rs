//! Error types for the nedra crate

use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error while reading the dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset document is not valid JSON or does not match the schema
    #[error("Invalid dataset document: {0}")]
    Json(#[from] serde_json::Error),
}
