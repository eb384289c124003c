//! Rule sets: one validated conversion per feature kind.

use ovt_model::{
    AddressProperties, BuildingProperties, FeatureKind, PlaceProperties, Record,
    ValidationError,
};
use ovt_tags::CategoryLookup;
use serde_json::Value;

use crate::address::convert_address;
use crate::building::convert_building;
use crate::options::{AddressOptions, BuildingOptions, PlaceOptions};
use crate::outcome::Outcome;
use crate::place::convert_place;

/// Validates a property document and converts it to an [`Outcome`].
pub trait RuleSet {
    fn kind(&self) -> FeatureKind;

    fn apply(&self, document: &Value) -> Result<Outcome, ValidationError>;
}

#[derive(Debug, Clone)]
pub struct PlaceRules<'a> {
    pub lookup: &'a CategoryLookup,
    pub options: PlaceOptions,
}

impl<'a> PlaceRules<'a> {
    /// Place rules over `lookup`.
    pub fn new(lookup: &'a CategoryLookup, options: PlaceOptions) -> Self {
        Self { lookup, options }
    }
}

impl RuleSet for PlaceRules<'_> {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Place
    }

    fn apply(&self, document: &Value) -> Result<Outcome, ValidationError> {
        let place = PlaceProperties::from_value(document)?;
        Ok(convert_place(&place, self.lookup, &self.options))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildingRules {
    pub options: BuildingOptions,
}

impl BuildingRules {
    pub fn new(options: BuildingOptions) -> Self {
        Self { options }
    }
}

impl RuleSet for BuildingRules {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Building
    }

    fn apply(&self, document: &Value) -> Result<Outcome, ValidationError> {
        let building = BuildingProperties::from_value(document)?;
        Ok(convert_building(&building, &self.options))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddressRules {
    pub options: AddressOptions,
}

impl AddressRules {
    pub fn new(options: AddressOptions) -> Self {
        Self { options }
    }
}

impl RuleSet for AddressRules {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Address
    }

    fn apply(&self, document: &Value) -> Result<Outcome, ValidationError> {
        let address = AddressProperties::from_value(document)?;
        Ok(convert_address(&address, &self.options))
    }
}
