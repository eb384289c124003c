//! Per-feature conversion outcome.

use crate::error::{ConvertError, Result};
use crate::tags::TagMap;

/// Result of applying a rule set to one validated feature.
///
/// Rejections are ordinary values so the collection driver can drop the
/// feature and keep going.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Converted tags.
    Accepted(TagMap),
    /// Confidence below the threshold.
    RejectedConfidence { threshold: f64, actual: f64 },
    /// Category missing from the table under the `error` policy.
    RejectedUnmatched { category: String },
}

impl Outcome {
    /// Whether the feature was converted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    /// Tags of an accepted feature.
    pub fn tags(&self) -> Option<&TagMap> {
        match self {
            Outcome::Accepted(tags) => Some(tags),
            _ => None,
        }
    }

    /// Single-feature view: rejections become errors.
    pub fn into_result(self) -> Result<TagMap> {
        match self {
            Outcome::Accepted(tags) => Ok(tags),
            Outcome::RejectedConfidence { threshold, actual } => {
                Err(ConvertError::Confidence { threshold, actual })
            }
            Outcome::RejectedUnmatched { category } => Err(ConvertError::Unmatched { category }),
        }
    }
}
