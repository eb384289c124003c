//! `place` conversion rules.

use ovt_model::{PlaceProperties, Record};
use ovt_tags::{CategoryLookup, CategoryResolution, UnmatchedCategory};
use serde_json::Value;

use crate::error::Result;
use crate::options::PlaceOptions;
use crate::outcome::Outcome;
use crate::statement::source_statement;
use crate::tags::{TagBuilder, TagMap};

/// Convert validated place properties to OSM tags.
///
/// Steps run in a fixed order and later steps overwrite keys set by earlier
/// ones (for example a `brand` tag from the category table is replaced by the
/// place's own brand).
pub fn convert_place(
    place: &PlaceProperties,
    lookup: &CategoryLookup,
    options: &PlaceOptions,
) -> Outcome {
    if place.confidence < options.confidence_threshold {
        return Outcome::RejectedConfidence {
            threshold: options.confidence_threshold,
            actual: place.confidence,
        };
    }

    let mut tags = TagBuilder::new();

    if let Some(categories) = &place.categories {
        match lookup.resolve(&categories.main, options.unmatched) {
            Ok(CategoryResolution::Matched(entry)) => {
                tags.extend(entry);
            }
            Ok(CategoryResolution::Forced(category)) => {
                tags.set("type", category);
            }
            Ok(CategoryResolution::Ignored) => {}
            Err(UnmatchedCategory { category }) => {
                return Outcome::RejectedUnmatched { category };
            }
        }
    }

    tags.set_non_empty("name", &place.names.primary);

    if let Some(phone) = place.phones.as_deref().and_then(<[String]>::first) {
        tags.set("phone", phone.as_str());
    }
    if let Some(website) = place.websites.as_deref().and_then(<[String]>::first) {
        tags.set_non_empty("website", website);
    }

    if let Some(address) = place.addresses.first() {
        let fields = [
            ("addr:street_address", &address.freeform),
            ("addr:country", &address.country),
            ("addr:postcode", &address.postcode),
            ("addr:city", &address.locality),
            (options.region_tag.as_str(), &address.region),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                tags.set_non_empty(key, value);
            }
        }
    }

    if let Some(statement) = source_statement(&place.sources) {
        tags.set("source", statement);
    }

    for social in place.socials.iter().flatten() {
        if social.contains("facebook") {
            tags.set("contact:facebook", social.as_str());
        } else if social.contains("twitter") {
            tags.set("contact:twitter", social.as_str());
        }
    }

    if let Some(brand) = &place.brand {
        tags.set("brand", brand.names.primary.as_str());
        if let Some(wikidata) = &brand.wikidata {
            tags.set_non_empty("brand:wikidata", wikidata);
        }
    }

    Outcome::Accepted(tags.finish())
}

/// Validate a place property document and convert it.
pub fn process_place(
    document: &Value,
    lookup: &CategoryLookup,
    options: &PlaceOptions,
) -> Result<TagMap> {
    let place = PlaceProperties::from_value(document)?;
    convert_place(&place, lookup, options).into_result()
}
