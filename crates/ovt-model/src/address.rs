//! Overture `address` properties.

use serde::Deserialize;

use crate::error::{FieldPath, Result};
use crate::schema::{Record, check_each, check_id, check_length, null_as_default};
use crate::source::Source;

/// Maximum number of administrative levels on an address.
pub const MAX_ADDRESS_LEVELS: usize = 5;

/// One administrative level (state, city, ...), most significant first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressLevel {
    pub value: String,
}

/// Validated properties of an `address` feature.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressProperties {
    pub id: Option<String>,
    pub version: u32,
    pub theme: Option<String>,
    #[serde(rename = "type")]
    pub feature_type: Option<String>,
    pub number: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    /// 1 to 5 levels when present.
    pub address_levels: Option<Vec<AddressLevel>>,
    /// Empty when the document has none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
}

impl AddressProperties {
    /// Administrative levels, most significant first; empty when absent.
    pub fn levels(&self) -> &[AddressLevel] {
        self.address_levels.as_deref().unwrap_or_default()
    }

    /// Present street-level members keyed by their `addr:*` tag.
    pub fn addr_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("addr:housenumber", &self.number),
            ("addr:street", &self.street),
            ("addr:postcode", &self.postcode),
            ("addr:country", &self.country),
        ]
        .into_iter()
        .filter_map(|(key, value)| Some((key, value.as_deref()?)))
        .collect()
    }
}

impl Record for AddressProperties {
    fn check(&self, path: &FieldPath) -> Result<()> {
        check_id(path, self.id.as_deref())?;
        if let Some(levels) = &self.address_levels {
            check_length(&path.key("address_levels"), levels.len(), 1, MAX_ADDRESS_LEVELS)?;
        }
        check_each(&path.key("sources"), &self.sources)
    }
}
