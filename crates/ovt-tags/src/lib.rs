//! Overture place category to OSM tag lookup.
//!
//! The table is an immutable `{category: {key: value}}` mapping, loaded once per
//! process from the embedded resource or a user file (see [`load`]). Categories
//! without an entry are handled by an [`UnmatchedPolicy`].
//!
//! The embedded table is a curated subset of roughly 90 common Overture
//! categories, not the full taxonomy. Real Overture extracts contain many
//! categories it does not list, so under [`UnmatchedPolicy::Error`] most places
//! are rejected unless a complete table is supplied through [`load`].

pub mod embedded;
pub mod error;
pub mod lookup;
pub mod policy;

pub use error::{LookupError, Result};
pub use lookup::{CATEGORIES_ENV_VAR, CategoryLookup, TagEntry, embedded_table, load};
pub use policy::{CategoryResolution, UnmatchedCategory, UnmatchedPolicy};
