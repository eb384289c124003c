//! Error types for single-feature conversion.

use ovt_model::ValidationError;
use thiserror::Error;

/// Why a single feature could not be converted.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The property document does not match the schema.
    #[error("Invalid properties: {0}")]
    Validation(#[from] ValidationError),

    /// Feature (or source) confidence is below the configured threshold.
    #[error("Confidence {actual} is below the threshold {threshold}")]
    Confidence { threshold: f64, actual: f64 },

    /// Category has no table entry and the policy is `error`.
    #[error("Category '{category}' has no OSM tag mapping")]
    Unmatched { category: String },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
