//! `building` conversion rules.

use ovt_model::{AttributeValue, BuildingProperties, Record};
use serde_json::Value;

use crate::error::Result;
use crate::options::BuildingOptions;
use crate::outcome::Outcome;
use crate::statement::source_statement;
use crate::tags::{TagBuilder, TagMap};

/// Convert validated building properties to OSM tags.
pub fn convert_building(building: &BuildingProperties, options: &BuildingOptions) -> Outcome {
    let threshold = options.confidence_threshold;

    // Unreported and zero confidences do not take part in the check.
    let reported: Vec<f64> = building
        .sources
        .iter()
        .filter_map(|source| source.confidence)
        .filter(|confidence| *confidence > 0.0)
        .collect();
    if reported.iter().any(|confidence| *confidence < threshold) {
        let actual = reported.iter().copied().fold(f64::MIN, f64::max);
        return Outcome::RejectedConfidence { threshold, actual };
    }

    let mut tags = TagBuilder::new();

    let class = building.class.as_deref().filter(|class| !class.is_empty());
    tags.set("building", class.unwrap_or("yes"));

    if let Some(statement) = source_statement(&building.sources) {
        tags.set("source", statement);
    }

    for (name, value) in building.appearance() {
        let key = appearance_key(name);
        match value {
            AttributeValue::Text(text) => tags.set(key, text),
            AttributeValue::Number(number) => tags.set_decimal(&key, number),
        };
    }
    for (key, height) in building.heights() {
        tags.set_decimal(key, height);
    }

    if building.is_underground == Some(true) {
        tags.set("location", "underground");
    }

    let levels = [
        ("building:levels", building.num_floors),
        ("building:levels:underground", building.num_floors_underground),
        ("building:min_level", building.min_floor),
    ];
    for (key, value) in levels {
        if let Some(value) = value {
            tags.set_integer(key, value);
        }
    }

    if let Some(names) = &building.names {
        tags.set_non_empty("name", &names.primary);
    }

    Outcome::Accepted(tags.finish())
}

/// OSM key for a `facade_*`/`roof_*` member (`facade_color` is `building:colour`).
pub fn appearance_key(name: &str) -> String {
    name.replace("facade", "building")
        .replace('_', ":")
        .replace("color", "colour")
}

/// Validate a building property document and convert it.
pub fn process_building(document: &Value, options: &BuildingOptions) -> Result<TagMap> {
    let building = BuildingProperties::from_value(document)?;
    convert_building(&building, options).into_result()
}
