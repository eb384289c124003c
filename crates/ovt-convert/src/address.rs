//! `address` conversion rules.

use ovt_model::{AddressProperties, Record};
use serde_json::Value;

use crate::error::Result;
use crate::options::{AddressOptions, AddressStyle};
use crate::outcome::Outcome;
use crate::statement::source_statement;
use crate::tags::{TagBuilder, TagMap};

/// Convert validated address properties to OSM tags. Addresses are never rejected.
pub fn convert_address(address: &AddressProperties, options: &AddressOptions) -> Outcome {
    let mut tags = TagBuilder::new();

    for (key, value) in address.addr_fields() {
        tags.set(key, value);
    }

    if let Some(statement) = source_statement(&address.sources) {
        tags.set("source", statement);
    }

    match &options.style {
        AddressStyle::Us => {
            if let Some(state) = address.levels().first() {
                tags.set("addr:state", state.value.as_str());
            }
        }
        AddressStyle::Other(_) => {}
    }

    Outcome::Accepted(tags.finish())
}

/// Validate an address property document and convert it.
pub fn process_address(document: &Value, options: &AddressOptions) -> Result<TagMap> {
    let address = AddressProperties::from_value(document)?;
    convert_address(&address, options).into_result()
}
