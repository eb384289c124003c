//! Error types for category table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a category table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// Category file could not be read.
    #[error("Failed to read category table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Category table is not a `{category: {key: value}}` JSON object.
    #[error("Invalid category table {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The embedded table failed to parse.
    #[error("Embedded category table is invalid: {message}")]
    Embedded { message: String },
}

/// Result type for category table operations.
pub type Result<T> = std::result::Result<T, LookupError>;
