//! Typed Overture property models.
//!
//! Each feature kind (`place`, `building`, `address`) has a record type that
//! derives `Deserialize` and is read strictly from an untyped JSON property
//! document. Unknown members, wrong JSON types, out-of-range numbers and
//! pattern mismatches are rejected with the path of the offending value.
//!
//! ```
//! use ovt_model::{FeatureKind, FeatureProperties, validate};
//! use serde_json::json;
//!
//! let document = json!({"version": 0, "number": "1000", "street": "COMMONWEALTH AVE"});
//! let FeatureProperties::Address(address) = validate(FeatureKind::Address, &document)? else {
//!     unreachable!();
//! };
//! assert_eq!(address.number.as_deref(), Some("1000"));
//! # Ok::<(), ovt_model::ValidationError>(())
//! ```

pub mod address;
pub mod building;
pub mod error;
pub mod kind;
pub mod names;
pub mod patterns;
pub mod place;
pub mod schema;
pub mod source;

pub use address::{AddressLevel, AddressProperties};
pub use building::{AttributeValue, BuildingProperties};
pub use error::{FieldPath, Result, ValidationError, Violation};
pub use kind::{FeatureKind, FeatureProperties, validate};
pub use names::{NameRule, NameVariant, Names};
pub use place::{Brand, Categories, PlaceAddress, PlaceProperties};
pub use schema::Record;
pub use source::Source;
