use ovt_convert::{ConvertError, Outcome, PlaceOptions, convert_place, process_place};
use ovt_model::{PlaceProperties, Record};
use ovt_tags::{CategoryLookup, UnmatchedPolicy};
use proptest::prelude::*;
use serde_json::{Value, json};

fn lookup() -> CategoryLookup {
    CategoryLookup::from_json_str(
        "test",
        r#"{"notary_public": {"office": "lawyer", "lawyer": "notary"}}"#,
    )
    .unwrap()
}

fn place_document() -> Value {
    json!({
        "id": "123",
        "version": 1,
        "update_time": "2022-01-01T00:00:00Z",
        "sources": [
            {
                "property": "property1",
                "dataset": "dataset1",
                "record_id": "record1",
                "confidence": 0.8
            }
        ],
        "names": {
            "primary": "Primary Name",
            "common": {"ex": "Example common name"},
            "rules": [{"variant": "short", "value": "EX"}]
        },
        "brand": {
            "wikidata": "Q123",
            "names": {"primary": "Brand Name"}
        },
        "categories": {
            "main": "notary_public",
            "alternate": ["alternate_category1", "alternate_category2"]
        },
        "confidence": 0.8,
        "websites": ["https://example.com/"],
        "socials": ["https://www.facebook.com/example/"],
        "phones": ["+1234567890"],
        "addresses": [
            {
                "freeform": "123 Main St",
                "locality": "City",
                "postcode": "12345",
                "region": "CA",
                "country": "US"
            }
        ]
    })
}

fn process(document: &Value, options: &PlaceOptions) -> ovt_convert::Result<ovt_convert::TagMap> {
    process_place(document, &lookup(), options)
}

#[test]
fn full_place_converts() {
    let tags = process(&place_document(), &PlaceOptions::default()).unwrap();
    insta::assert_json_snapshot!(tags, @r#"
    {
      "addr:city": "City",
      "addr:country": "US",
      "addr:postcode": "12345",
      "addr:state": "CA",
      "addr:street_address": "123 Main St",
      "brand": "Brand Name",
      "brand:wikidata": "Q123",
      "contact:facebook": "https://www.facebook.com/example/",
      "lawyer": "notary",
      "name": "Primary Name",
      "office": "lawyer",
      "phone": "+1234567890",
      "source": "dataset1 via overture2osm",
      "website": "https://example.com/"
    }
    "#);
}

#[test]
fn minimal_place_example() {
    let document = json!({
        "version": 0,
        "update_time": "2024-01-01",
        "confidence": 0.8,
        "names": {"primary": "Primary Name"},
        "categories": {"main": "notary_public"},
        "phones": ["+123"],
        "websites": ["https://example.com"],
        "addresses": [{"freeform": "123 Main St", "region": "CA", "country": "US"}],
        "sources": [{"property": "", "dataset": "dataset1"}]
    });
    let tags = process(&document, &PlaceOptions::default()).unwrap();
    assert_eq!(tags.get("name"), Some("Primary Name"));
    assert_eq!(tags.get("phone"), Some("+123"));
    assert_eq!(tags.get("website"), Some("https://example.com"));
    assert_eq!(tags.get("addr:street_address"), Some("123 Main St"));
    assert_eq!(tags.get("addr:state"), Some("CA"));
    assert_eq!(tags.get("addr:country"), Some("US"));
    assert_eq!(tags.get("source"), Some("dataset1 via overture2osm"));
    assert_eq!(tags.get("office"), Some("lawyer"));
    assert_eq!(tags.get("lawyer"), Some("notary"));
}

#[test]
fn no_brand_no_brand_tags() {
    let mut document = place_document();
    document.as_object_mut().unwrap().remove("brand");
    let tags = process(&document, &PlaceOptions::default()).unwrap();
    assert!(!tags.contains_key("brand"));
    assert!(!tags.contains_key("brand:wikidata"));
    assert_eq!(tags.len(), 12);
}

#[test]
fn no_category_no_category_tags() {
    let mut document = place_document();
    document.as_object_mut().unwrap().remove("categories");
    let options = PlaceOptions::default().with_unmatched(UnmatchedPolicy::Error);
    let tags = process(&document, &options).unwrap();
    assert!(!tags.contains_key("office"));
    assert!(!tags.contains_key("lawyer"));
    assert!(!tags.contains_key("type"));
}

#[test]
fn twitter_is_added_next_to_facebook() {
    let mut document = place_document();
    document["socials"] = json!([
        "https://www.facebook.com/example/",
        "https://twitter.com/example/"
    ]);
    let tags = process(&document, &PlaceOptions::default()).unwrap();
    assert_eq!(
        tags.get("contact:facebook"),
        Some("https://www.facebook.com/example/")
    );
    assert_eq!(tags.get("contact:twitter"), Some("https://twitter.com/example/"));
}

#[test]
fn last_social_per_platform_wins() {
    let mut document = place_document();
    document["socials"] = json!([
        "https://www.facebook.com/first/",
        "https://twitter.com/first/",
        "https://www.facebook.com/second/",
        "https://example.com/facebook-and-twitter/"
    ]);
    let tags = process(&document, &PlaceOptions::default()).unwrap();
    assert_eq!(
        tags.get("contact:facebook"),
        Some("https://example.com/facebook-and-twitter/")
    );
    assert_eq!(tags.get("contact:twitter"), Some("https://twitter.com/first/"));
}

#[test]
fn low_confidence_is_rejected_with_both_values() {
    let options = PlaceOptions::default().with_confidence_threshold(0.9);
    let error = process(&place_document(), &options).unwrap_err();
    assert_eq!(
        error,
        ConvertError::Confidence {
            threshold: 0.9,
            actual: 0.8
        }
    );
}

#[test]
fn invalid_confidence_is_a_validation_error() {
    let mut document = place_document();
    document["confidence"] = json!(-0.1);
    let error = process(&document, &PlaceOptions::default()).unwrap_err();
    assert!(matches!(error, ConvertError::Validation(_)));
}

#[test]
fn unmatched_category_policies() {
    let mut document = place_document();
    document["categories"]["main"] = json!("invalid_category");

    let ignored = process(
        &document,
        &PlaceOptions::default().with_unmatched(UnmatchedPolicy::Ignore),
    )
    .unwrap();
    assert!(!ignored.contains_key("office"));
    assert!(!ignored.contains_key("type"));

    let forced = process(
        &document,
        &PlaceOptions::default().with_unmatched(UnmatchedPolicy::Force),
    )
    .unwrap();
    assert_eq!(forced.get("type"), Some("invalid_category"));
    assert!(!forced.contains_key("office"));

    let error = process(
        &document,
        &PlaceOptions::default().with_unmatched(UnmatchedPolicy::Error),
    )
    .unwrap_err();
    assert_eq!(
        error,
        ConvertError::Unmatched {
            category: "invalid_category".to_string()
        }
    );
}

#[test]
fn custom_region_tag() {
    let options = PlaceOptions::default().with_region_tag("addr:province");
    let tags = process(&place_document(), &options).unwrap();
    assert_eq!(tags.get("addr:province"), Some("CA"));
    assert!(!tags.contains_key("addr:state"));
}

#[test]
fn only_first_address_phone_and_website_are_used() {
    let mut document = place_document();
    document["phones"] = json!(["+1", "+2"]);
    document["websites"] = json!(["https://a.example/", "https://b.example/"]);
    document["addresses"] = json!([
        {"locality": "First"},
        {"locality": "Second", "freeform": "1 Other Rd"}
    ]);
    let tags = process(&document, &PlaceOptions::default()).unwrap();
    assert_eq!(tags.get("phone"), Some("+1"));
    assert_eq!(tags.get("website"), Some("https://a.example/"));
    assert_eq!(tags.get("addr:city"), Some("First"));
    assert!(!tags.contains_key("addr:street_address"));
}

#[test]
fn empty_phone_and_website_lists_add_nothing() {
    let mut document = place_document();
    document["phones"] = json!([]);
    document["websites"] = json!([""]);
    let tags = process(&document, &PlaceOptions::default()).unwrap();
    assert!(!tags.contains_key("phone"));
    assert!(!tags.contains_key("website"));
}

#[test]
fn brand_overwrites_category_brand() {
    let lookup = CategoryLookup::from_json_str(
        "test",
        r#"{"notary_public": {"office": "lawyer", "brand": "Generic"}}"#,
    )
    .unwrap();
    let place = PlaceProperties::from_value(&place_document()).unwrap();
    let outcome = convert_place(&place, &lookup, &PlaceOptions::default());
    assert_eq!(outcome.tags().and_then(|tags| tags.get("brand")), Some("Brand Name"));
}

proptest! {
    #[test]
    fn confidence_threshold_decides_rejection(confidence in 0.0f64..=1.0, threshold in 0.0f64..=1.0) {
        let mut document = place_document();
        document["confidence"] = json!(confidence);
        let place = PlaceProperties::from_value(&document).unwrap();
        let options = PlaceOptions::default().with_confidence_threshold(threshold);
        let outcome = convert_place(&place, &lookup(), &options);
        if confidence < threshold {
            prop_assert_eq!(outcome, Outcome::RejectedConfidence { threshold, actual: confidence });
        } else {
            prop_assert!(outcome.is_accepted());
        }
    }

    #[test]
    fn matched_category_tags_ignore_policy(policy in prop_oneof![
        Just(UnmatchedPolicy::Ignore),
        Just(UnmatchedPolicy::Force),
        Just(UnmatchedPolicy::Error),
    ]) {
        let options = PlaceOptions::default().with_unmatched(policy);
        let tags = process(&place_document(), &options).unwrap();
        prop_assert_eq!(tags.get("office"), Some("lawyer"));
        prop_assert_eq!(tags.get("lawyer"), Some("notary"));
        prop_assert!(!tags.contains_key("type"));
    }
}
