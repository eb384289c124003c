use ovt_convert::{BuildingOptions, ConvertError, process_building};
use serde_json::{Value, json};

fn building_document() -> Value {
    json!({
        "theme": "buildings",
        "type": "building",
        "version": 1,
        "level": 1,
        "height": 21.34,
        "has_parts": false,
        "num_floors": 4,
        "names": {
            "primary": "Clarendon Family Dentistry",
            "common": null,
            "rules": null
        },
        "num_floors_underground": 1,
        "subtype": "transportation",
        "class": "parking",
        "is_underground": false,
        "sources": [
            {"property": "", "dataset": "microsoftMLBuildings,", "confidence": 0.7},
            {
                "property": "/properties/height",
                "dataset": "metaLidarExtractions,",
                "confidence": 0.45
            }
        ]
    })
}

#[test]
fn full_building_converts() {
    let tags = process_building(&building_document(), &BuildingOptions::default()).unwrap();
    insta::assert_json_snapshot!(tags, @r#"
    {
      "building": "parking",
      "building:levels": "4",
      "building:levels:underground": "1",
      "height": "21.34",
      "name": "Clarendon Family Dentistry",
      "source": "metaLidarExtractions, microsoftMLBuildings via overture2osm"
    }
    "#);
}

#[test]
fn parking_building_example() {
    let document = json!({
        "version": 0,
        "class": "parking",
        "num_floors": 4,
        "num_floors_underground": 1,
        "height": 21.34,
        "sources": [
            {"property": "", "dataset": "a", "confidence": 0.7},
            {"property": "", "dataset": "b", "confidence": 0.45}
        ]
    });
    let tags = process_building(&document, &BuildingOptions::default()).unwrap();
    assert_eq!(tags.get("building"), Some("parking"));
    assert_eq!(tags.get("building:levels"), Some("4"));
    assert_eq!(tags.get("building:levels:underground"), Some("1"));
    assert_eq!(tags.get("height"), Some("21.34"));
    assert_eq!(tags.get("source"), Some("a, b via overture2osm"));
}

#[test]
fn rejection_reports_highest_source_confidence() {
    let options = BuildingOptions::default().with_confidence_threshold(0.9);
    let error = process_building(&building_document(), &options).unwrap_err();
    assert_eq!(
        error,
        ConvertError::Confidence {
            threshold: 0.9,
            actual: 0.7
        }
    );
}

#[test]
fn threshold_between_source_confidences_still_rejects() {
    let options = BuildingOptions::default().with_confidence_threshold(0.5);
    let error = process_building(&building_document(), &options).unwrap_err();
    assert!(matches!(error, ConvertError::Confidence { actual, .. } if actual == 0.7));
}

#[test]
fn unreported_confidences_do_not_reject() {
    let mut document = building_document();
    document["sources"] = json!([
        {"property": "", "dataset": "a"},
        {"property": "", "dataset": "b", "confidence": 0.0}
    ]);
    let options = BuildingOptions::default().with_confidence_threshold(0.9);
    assert!(process_building(&document, &options).is_ok());
}

#[test]
fn missing_class_defaults_to_yes() {
    let mut document = building_document();
    document.as_object_mut().unwrap().remove("class");
    let tags = process_building(&document, &BuildingOptions::default()).unwrap();
    assert_eq!(tags.get("building"), Some("yes"));
}

#[test]
fn appearance_and_heights_are_renamed_and_rounded() {
    let mut document = building_document();
    let object = document.as_object_mut().unwrap();
    object.insert("facade_color".into(), json!("#ff0000"));
    object.insert("facade_material".into(), json!("brick"));
    object.insert("roof_color".into(), json!("grey"));
    object.insert("roof_shape".into(), json!("gabled"));
    object.insert("roof_height".into(), json!(2.346));
    object.insert("min_height".into(), json!(3.0));
    object.insert("min_floor".into(), json!(2));
    object.insert("is_underground".into(), json!(true));

    let tags = process_building(&document, &BuildingOptions::default()).unwrap();
    assert_eq!(tags.get("building:colour"), Some("#ff0000"));
    assert_eq!(tags.get("building:material"), Some("brick"));
    assert_eq!(tags.get("roof:colour"), Some("grey"));
    assert_eq!(tags.get("roof:shape"), Some("gabled"));
    assert_eq!(tags.get("roof:height"), Some("2.35"));
    assert_eq!(tags.get("min_height"), Some("3"));
    assert_eq!(tags.get("building:min_level"), Some("2"));
    assert_eq!(tags.get("location"), Some("underground"));
}

#[test]
fn unknown_member_fails_validation() {
    let mut document = building_document();
    document["roof_colour"] = json!("grey");
    let error = process_building(&document, &BuildingOptions::default()).unwrap_err();
    let ConvertError::Validation(error) = error else {
        panic!("expected a validation error, got {error:?}");
    };
    assert_eq!(error.path.to_string(), "roof_colour");
}
