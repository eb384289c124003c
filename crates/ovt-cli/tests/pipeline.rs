//! Integration tests for file-level conversion and validation.

use std::fs;
use std::path::Path;

use ovt_cli::io::read_collection;
use ovt_cli::pipeline::{convert_file, validate_file};
use ovt_convert::{AddressRules, BuildingOptions, BuildingRules, PlaceOptions, PlaceRules};
use ovt_model::FeatureKind;
use ovt_tags::{CategoryLookup, UnmatchedPolicy};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: &Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn place(confidence: f64, category: &str) -> Value {
    json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [-1, 1]},
        "properties": {
            "version": 1,
            "update_time": "2022-01-01T00:00:00Z",
            "sources": [{"property": "", "dataset": "dataset1"}],
            "names": {"primary": "Primary Name"},
            "categories": {"main": category},
            "confidence": confidence,
            "addresses": [{"region": "CA"}]
        }
    })
}

fn collection(features: Vec<Value>) -> Value {
    json!({"type": "FeatureCollection", "features": features})
}

fn lookup() -> CategoryLookup {
    CategoryLookup::from_json_str(
        "test",
        r#"{"notary_public": {"office": "lawyer", "lawyer": "notary"}}"#,
    )
    .unwrap()
}

#[test]
fn place_file_converts_to_output() {
    let dir = TempDir::new().unwrap();
    let input = write_json(
        &dir,
        "places.geojson",
        &collection(vec![place(0.8, "notary_public"), place(0.1, "notary_public")]),
    );
    let output = dir.path().join("out.geojson");
    let lookup = lookup();
    let rules = PlaceRules::new(&lookup, PlaceOptions::default().with_confidence_threshold(0.5));

    let report = convert_file(&input, &output, &rules).unwrap();

    assert_eq!(report.kind, FeatureKind::Place);
    assert_eq!(report.summary.converted, 1);
    assert_eq!(report.summary.dropped_confidence, 1);
    insta::assert_json_snapshot!(read_json(&output), @r#"
    {
      "features": [
        {
          "geometry": {
            "coordinates": [
              -1,
              1
            ],
            "type": "Point"
          },
          "properties": {
            "addr:state": "CA",
            "lawyer": "notary",
            "name": "Primary Name",
            "office": "lawyer",
            "source": "dataset1 via overture2osm"
          },
          "type": "Feature"
        }
      ],
      "type": "FeatureCollection"
    }
    "#);
    // Input is untouched.
    assert_eq!(read_collection(&input).unwrap().features.len(), 2);
}

#[test]
fn in_place_conversion_overwrites_input() {
    let dir = TempDir::new().unwrap();
    let input = write_json(
        &dir,
        "addresses.geojson",
        &collection(vec![json!({
            "type": "Feature",
            "geometry": null,
            "properties": {"version": 0, "number": "1000", "address_levels": [{"value": "MA"}]}
        })]),
    );

    convert_file(&input, &input, &AddressRules::default()).unwrap();

    let converted = read_json(&input);
    assert_eq!(
        converted["features"][0]["properties"],
        json!({"addr:housenumber": "1000", "addr:state": "MA"})
    );
}

#[test]
fn empty_result_is_an_error_and_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let input = write_json(
        &dir,
        "places.geojson",
        &collection(vec![place(0.8, "bakery")]),
    );
    let output = dir.path().join("out.geojson");
    let lookup = lookup();
    let rules = PlaceRules::new(
        &lookup,
        PlaceOptions::default().with_unmatched(UnmatchedPolicy::Error),
    );

    let error = convert_file(&input, &output, &rules).unwrap_err();

    assert!(error.to_string().contains("no place features left"));
    assert!(!output.exists());
}

#[test]
fn invalid_feature_aborts_conversion() {
    let dir = TempDir::new().unwrap();
    let mut broken = place(0.8, "notary_public");
    broken["properties"]["confidence"] = json!("high");
    let input = write_json(&dir, "places.geojson", &collection(vec![broken]));
    let output = dir.path().join("out.geojson");
    let lookup = lookup();
    let rules = PlaceRules::new(&lookup, PlaceOptions::default());

    let error = convert_file(&input, &output, &rules).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("Feature 0"), "{message}");
    assert!(message.contains("confidence"), "{message}");
    assert!(!output.exists());
}

#[test]
fn malformed_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.geojson");
    fs::write(&input, "{not json").unwrap();
    let rules = BuildingRules::new(BuildingOptions::default());

    let error = convert_file(&input, &dir.path().join("out.geojson"), &rules).unwrap_err();

    assert!(error.to_string().contains("broken.geojson"));
}

#[test]
fn validate_reports_each_invalid_feature() {
    let dir = TempDir::new().unwrap();
    let mut broken = place(0.8, "notary_public");
    broken["properties"]["addresses"][0]["country"] = json!("usa");
    let input = write_json(
        &dir,
        "places.geojson",
        &collection(vec![place(0.8, "notary_public"), broken]),
    );

    let report = validate_file(&input, FeatureKind::Place).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.valid(), 1);
    assert_eq!(report.failures.len(), 1);
    let (index, error) = &report.failures[0];
    assert_eq!(*index, 1);
    assert_eq!(error.path.to_string(), "addresses[0].country");
}
