//! Embedded category table.
//!
//! The default table ships inside the binary via `include_str!()` so the
//! converter works offline with no path resolution. Override it at runtime with
//! [`crate::CATEGORIES_ENV_VAR`] or an explicit file.

/// Overture place category to OSM tags, as JSON. Covers common categories only.
pub const PLACE_CATEGORIES: &str = include_str!("../data/place_categories.json");

/// Label used for the embedded table in logs and errors.
pub const PLACE_CATEGORIES_NAME: &str = "<embedded place_categories.json>";
