//! Overture `place` properties.

use serde::Deserialize;

use crate::error::{FieldPath, Result};
use crate::names::Names;
use crate::patterns;
use crate::schema::{Record, check_each, check_id, check_non_empty, check_pattern, check_range};
use crate::source::Source;

/// One postal address of a place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceAddress {
    pub freeform: Option<String>,
    pub locality: Option<String>,
    pub postcode: Option<String>,
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2.
    pub country: Option<String>,
}

impl Record for PlaceAddress {
    fn check(&self, path: &FieldPath) -> Result<()> {
        match &self.country {
            Some(country) => check_pattern(&path.key("country"), country, &patterns::COUNTRY),
            None => Ok(()),
        }
    }
}

/// Primary and alternate Overture categories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Categories {
    /// Primary category, the key into the category table.
    pub main: String,
    pub alternate: Option<Vec<String>>,
}

/// Brand a place belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Brand {
    /// Wikidata item id (`Q<digits>`).
    pub wikidata: Option<String>,
    pub names: Names,
}

impl Record for Brand {
    fn check(&self, path: &FieldPath) -> Result<()> {
        match &self.wikidata {
            Some(wikidata) => check_pattern(&path.key("wikidata"), wikidata, &patterns::WIKIDATA),
            None => Ok(()),
        }
    }
}

/// Validated properties of a `place` feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceProperties {
    pub id: Option<String>,
    pub version: u32,
    pub theme: Option<String>,
    #[serde(rename = "type")]
    pub feature_type: Option<String>,
    pub update_time: String,
    /// At least one source.
    pub sources: Vec<Source>,
    pub names: Names,
    pub brand: Option<Brand>,
    pub categories: Option<Categories>,
    /// Feature confidence in `[0, 1]`.
    pub confidence: f64,
    pub websites: Option<Vec<String>>,
    pub socials: Option<Vec<String>>,
    pub emails: Option<Vec<String>>,
    pub phones: Option<Vec<String>>,
    /// At least one address; only the first is converted.
    pub addresses: Vec<PlaceAddress>,
}

impl Record for PlaceProperties {
    fn check(&self, path: &FieldPath) -> Result<()> {
        check_id(path, self.id.as_deref())?;

        let sources = path.key("sources");
        check_non_empty(&sources, &self.sources)?;
        check_each(&sources, &self.sources)?;

        if let Some(brand) = &self.brand {
            brand.check(&path.key("brand"))?;
        }
        check_range(&path.key("confidence"), self.confidence, Some(0.0), Some(1.0))?;

        let addresses = path.key("addresses");
        check_non_empty(&addresses, &self.addresses)?;
        check_each(&addresses, &self.addresses)
    }
}
