//! Overture property to OSM tag conversion.
//!
//! Each feature kind has a `convert_*` function over its validated record,
//! returning an [`Outcome`], and a `process_*` function that validates a raw
//! JSON document first and reports rejections as [`ConvertError`]s.
//! [`convert_collection`] applies a [`RuleSet`] across a GeoJSON feature
//! collection, dropping rejected features.
//!
//! ```
//! use ovt_convert::{AddressOptions, process_address};
//! use serde_json::json;
//!
//! let document = json!({
//!     "version": 0,
//!     "number": "1000",
//!     "street": "COMMONWEALTH AVE",
//!     "address_levels": [{"value": "MA"}],
//! });
//! let tags = process_address(&document, &AddressOptions::default())?;
//! assert_eq!(tags.get("addr:state"), Some("MA"));
//! # Ok::<(), ovt_convert::ConvertError>(())
//! ```

pub mod address;
pub mod building;
pub mod collection;
pub mod error;
pub mod options;
pub mod outcome;
pub mod place;
pub mod rule_set;
pub mod statement;
pub mod tags;

pub use address::{convert_address, process_address};
pub use building::{convert_building, process_building};
pub use collection::{
    BatchError, BatchResult, BatchSummary, Feature, FeatureCollection, convert_collection,
};
pub use error::{ConvertError, Result};
pub use options::{AddressOptions, AddressStyle, BuildingOptions, PlaceOptions};
pub use outcome::Outcome;
pub use place::{convert_place, process_place};
pub use rule_set::{AddressRules, BuildingRules, PlaceRules, RuleSet};
pub use statement::{PRODUCT_NAME, source_statement};
pub use tags::{TagBuilder, TagMap};
