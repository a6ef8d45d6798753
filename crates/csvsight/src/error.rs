//! Error types for the csvsight library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvsight operations.
#[derive(Debug, Error)]
pub enum CsvsightError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Candidate upload failed admissibility checks.
    #[error("{0}")]
    InvalidUpload(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Analysis service reply failed shape validation.
    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),

    /// Transport or API failure talking to the analysis service.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for csvsight operations.
pub type Result<T> = std::result::Result<T, CsvsightError>;
