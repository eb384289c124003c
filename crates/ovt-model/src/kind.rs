//! Feature kinds and kind-dispatched validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::AddressProperties;
use crate::building::BuildingProperties;
use crate::error::Result;
use crate::place::PlaceProperties;
use crate::schema::Record;

/// Overture feature kinds this workspace converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Place,
    Building,
    Address,
}

impl FeatureKind {
    /// Singular lowercase name, as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Place => "place",
            FeatureKind::Building => "building",
            FeatureKind::Address => "address",
        }
    }

    /// Every supported kind.
    pub const fn all() -> &'static [FeatureKind] {
        &[FeatureKind::Place, FeatureKind::Building, FeatureKind::Address]
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "place" | "places" => Ok(FeatureKind::Place),
            "building" | "buildings" => Ok(FeatureKind::Building),
            "address" | "addresses" => Ok(FeatureKind::Address),
            _ => Err(format!("Unknown feature kind: {s}")),
        }
    }
}

/// A validated property document of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureProperties {
    Place(PlaceProperties),
    Building(BuildingProperties),
    Address(AddressProperties),
}

impl FeatureProperties {
    /// Kind of the validated document.
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureProperties::Place(_) => FeatureKind::Place,
            FeatureProperties::Building(_) => FeatureKind::Building,
            FeatureProperties::Address(_) => FeatureKind::Address,
        }
    }
}

/// Validate an untyped property document against the schema for `kind`.
pub fn validate(kind: FeatureKind, document: &Value) -> Result<FeatureProperties> {
    Ok(match kind {
        FeatureKind::Place => FeatureProperties::Place(PlaceProperties::from_value(document)?),
        FeatureKind::Building => {
            FeatureProperties::Building(BuildingProperties::from_value(document)?)
        }
        FeatureKind::Address => FeatureProperties::Address(AddressProperties::from_value(document)?),
    })
}
