//! Category table loading and lookup.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::embedded;
use crate::error::{LookupError, Result};

/// Environment variable naming a JSON file that replaces the embedded table.
pub const CATEGORIES_ENV_VAR: &str = "OVERTURE2OSM_CATEGORIES";

/// OSM tags for one category, key to value.
pub type TagEntry = BTreeMap<String, String>;

static EMBEDDED: LazyLock<std::result::Result<CategoryLookup, String>> = LazyLock::new(|| {
    CategoryLookup::from_json_str(embedded::PLACE_CATEGORIES_NAME, embedded::PLACE_CATEGORIES)
        .map_err(|error| error.to_string())
});

/// Immutable mapping from an Overture category to the OSM tags it implies.
///
/// Entries with no tags are dropped on construction, so a category either
/// maps to at least one tag or is unmatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryLookup {
    entries: BTreeMap<String, TagEntry>,
}

impl CategoryLookup {
    /// Parse a `{category: {key: value}}` JSON table. `name` labels errors.
    pub fn from_json_str(name: &str, json: &str) -> Result<Self> {
        let raw: BTreeMap<String, TagEntry> =
            serde_json::from_str(json).map_err(|source| LookupError::Json {
                name: name.to_string(),
                source,
            })?;
        let lookup: Self = raw.into_iter().collect();
        debug!(table = name, categories = lookup.len(), "loaded category table");
        if lookup.is_empty() {
            warn!(table = name, "category table has no usable entries");
        }
        Ok(lookup)
    }

    /// Read and parse a category table file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&path.display().to_string(), &json)
    }

    /// Tags for `category`, if the table has any.
    pub fn lookup(&self, category: &str) -> Option<&TagEntry> {
        self.entries.get(category)
    }

    /// Whether `category` has an entry.
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Number of categories with tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no usable entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagEntry)> {
        self.entries
            .iter()
            .map(|(category, tags)| (category.as_str(), tags))
    }
}

impl FromIterator<(String, TagEntry)> for CategoryLookup {
    fn from_iter<I: IntoIterator<Item = (String, TagEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .filter(|(_, tags)| !tags.is_empty())
                .collect(),
        }
    }
}

/// The table compiled into the binary, parsed once on first use.
pub fn embedded_table() -> Result<&'static CategoryLookup> {
    EMBEDDED
        .as_ref()
        .map_err(|message| LookupError::Embedded {
            message: message.clone(),
        })
}

/// Load the category table for this process.
///
/// Resolution order:
/// 1. `path`, when given
/// 2. the file named by `OVERTURE2OSM_CATEGORIES`
/// 3. the embedded table
pub fn load(path: Option<&Path>) -> Result<Cow<'static, CategoryLookup>> {
    match override_path(path) {
        Some(path) => CategoryLookup::from_path(&path).map(Cow::Owned),
        None => embedded_table().map(Cow::Borrowed),
    }
}

fn override_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CATEGORIES_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
