//! GeoJSON feature collections and the batch conversion driver.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, info_span};

use ovt_model::ValidationError;

use crate::outcome::Outcome;
use crate::rule_set::RuleSet;

const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURE: &str = "Feature";

/// A GeoJSON `FeatureCollection`. Members other than `type` and `features`
/// are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "feature_collection_type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A GeoJSON `Feature`. Only `properties` is rewritten by conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub feature_type: String,
    /// `None` when the member is absent; `Some(Value::Null)` for an unlocated feature.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub properties: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn feature_collection_type() -> String {
    FEATURE_COLLECTION.to_string()
}

fn feature_type() -> String {
    FEATURE.to_string()
}

/// Keep an explicit `null` distinct from an absent member.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Feature counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub dropped_confidence: usize,
    pub dropped_unmatched: usize,
}

impl BatchSummary {
    /// Features removed by either rejection.
    pub fn dropped(&self) -> usize {
        self.dropped_confidence + self.dropped_unmatched
    }
}

/// Converted collection plus counts.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub collection: FeatureCollection,
    pub summary: BatchSummary,
}

/// A feature failed validation; the whole batch is abandoned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Feature {index} has invalid properties: {source}")]
pub struct BatchError {
    /// Position of the feature in the input collection.
    pub index: usize,
    #[source]
    pub source: ValidationError,
}

/// Convert every feature in `collection` with `rules`.
///
/// Accepted features have their properties replaced by the tag mapping.
/// Features rejected for confidence or an unmatched category are dropped.
/// Everything else on the collection and its features is preserved.
pub fn convert_collection<R>(
    collection: FeatureCollection,
    rules: &R,
) -> Result<BatchResult, BatchError>
where
    R: RuleSet + ?Sized,
{
    let span = info_span!("convert_collection", kind = %rules.kind());
    let _guard = span.enter();

    let FeatureCollection {
        collection_type,
        features,
        extra,
    } = collection;

    let mut summary = BatchSummary {
        total: features.len(),
        ..BatchSummary::default()
    };
    let mut converted = Vec::with_capacity(features.len());

    for (index, mut feature) in features.into_iter().enumerate() {
        let outcome = rules
            .apply(&feature.properties)
            .map_err(|source| BatchError { index, source })?;
        match outcome {
            Outcome::Accepted(tags) => {
                feature.properties = tags.to_value();
                converted.push(feature);
                summary.converted += 1;
            }
            Outcome::RejectedConfidence { threshold, actual } => {
                debug!(index, threshold, actual, "Dropping feature below confidence threshold");
                summary.dropped_confidence += 1;
            }
            Outcome::RejectedUnmatched { category } => {
                debug!(index, %category, "Dropping feature with unmatched category");
                summary.dropped_unmatched += 1;
            }
        }
    }

    info!(
        total = summary.total,
        converted = summary.converted,
        dropped = summary.dropped(),
        "Converted feature collection"
    );

    Ok(BatchResult {
        collection: FeatureCollection {
            collection_type,
            features: converted,
            extra,
        },
        summary,
    })
}
