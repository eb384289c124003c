//! Overture `building` properties.

use serde::Deserialize;

use crate::error::{FieldPath, Result};
use crate::names::Names;
use crate::schema::{Record, check_each, check_id};
use crate::source::Source;

/// Value of a roof/facade attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// Validated properties of a `building` feature.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildingProperties {
    pub id: Option<String>,
    pub version: u32,
    pub theme: Option<String>,
    #[serde(rename = "type")]
    pub feature_type: Option<String>,
    pub has_parts: Option<bool>,
    pub sources: Vec<Source>,
    /// The Overture `class` member.
    pub class: Option<String>,
    pub subtype: Option<String>,
    pub names: Option<Names>,
    pub level: Option<i64>,
    pub height: Option<f64>,
    pub is_underground: Option<bool>,
    pub num_floors: Option<i64>,
    pub num_floors_underground: Option<i64>,
    pub min_height: Option<f64>,
    pub min_floor: Option<i64>,
    pub facade_color: Option<String>,
    pub facade_material: Option<String>,
    pub roof_material: Option<String>,
    pub roof_shape: Option<String>,
    pub roof_direction: Option<String>,
    pub roof_orientation: Option<String>,
    pub roof_color: Option<String>,
    pub roof_height: Option<f64>,
}

impl BuildingProperties {
    /// Present `roof*`/`facade*` members as `(input name, value)`, in schema order.
    pub fn appearance(&self) -> Vec<(&'static str, AttributeValue<'_>)> {
        let text = [
            ("facade_color", &self.facade_color),
            ("facade_material", &self.facade_material),
            ("roof_material", &self.roof_material),
            ("roof_shape", &self.roof_shape),
            ("roof_direction", &self.roof_direction),
            ("roof_orientation", &self.roof_orientation),
            ("roof_color", &self.roof_color),
        ];
        let mut fields: Vec<_> = text
            .into_iter()
            .filter_map(|(name, value)| Some((name, AttributeValue::Text(value.as_deref()?))))
            .collect();
        if let Some(height) = self.roof_height {
            fields.push(("roof_height", AttributeValue::Number(height)));
        }
        fields
    }

    /// Present `*height` members keyed by their OSM tag.
    pub fn heights(&self) -> Vec<(&'static str, f64)> {
        [
            ("height", self.height),
            ("min_height", self.min_height),
            ("roof:height", self.roof_height),
        ]
        .into_iter()
        .filter_map(|(key, value)| Some((key, value?)))
        .collect()
    }
}

impl Record for BuildingProperties {
    fn check(&self, path: &FieldPath) -> Result<()> {
        check_id(path, self.id.as_deref())?;
        check_each(&path.key("sources"), &self.sources)
    }
}
