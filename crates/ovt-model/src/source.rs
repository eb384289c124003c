//! Per-property provenance records.

use serde::Deserialize;

use crate::error::{FieldPath, Result};
use crate::schema::{Record, check_range};

/// Dataset name Overture uses for OpenStreetMap-derived properties.
pub const OSM_DATASET: &str = "OpenStreetMap";

/// Where one property of a feature came from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Source {
    /// JSON pointer of the property this source covers (empty for the whole feature).
    pub property: String,
    pub dataset: String,
    pub record_id: Option<String>,
    /// Reported confidence in `[0, 1]`.
    pub confidence: Option<f64>,
    pub update_time: Option<String>,
}

impl Source {
    /// Confidence with the schema default of `0.0` when not reported.
    pub fn confidence(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }

    /// Canonical openstreetmap.org URL for OSM-derived sources.
    ///
    /// Record ids carry the element type as their first letter (`n`, `w`, `r`).
    pub fn osm_link(&self) -> Option<String> {
        if self.dataset != OSM_DATASET {
            return None;
        }
        let record_id = self.record_id.as_deref()?;
        let element = match record_id.chars().next()? {
            'n' => "node",
            'w' => "way",
            'r' => "relation",
            _ => return None,
        };
        Some(format!(
            "https://www.openstreetmap.org/{element}/{}",
            &record_id[1..]
        ))
    }
}

impl Record for Source {
    fn check(&self, path: &FieldPath) -> Result<()> {
        if let Some(confidence) = self.confidence {
            check_range(&path.key("confidence"), confidence, Some(0.0), Some(1.0))?;
        }
        Ok(())
    }
}
