//! Handling of categories the table has no entry for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lookup::{CategoryLookup, TagEntry};

/// What to do when a place's main category is not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Add no category tags.
    #[default]
    Ignore,
    /// Add `type = <category>`.
    Force,
    /// Reject the feature.
    Error,
}

impl UnmatchedPolicy {
    /// Lowercase name, as accepted by `--unmatched`.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnmatchedPolicy::Ignore => "ignore",
            UnmatchedPolicy::Force => "force",
            UnmatchedPolicy::Error => "error",
        }
    }
}

impl fmt::Display for UnmatchedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnmatchedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(UnmatchedPolicy::Ignore),
            "force" => Ok(UnmatchedPolicy::Force),
            "error" => Ok(UnmatchedPolicy::Error),
            _ => Err(format!("Unknown unmatched policy: {s}")),
        }
    }
}

/// Tags a category contributes after applying the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryResolution<'a> {
    /// The table entry for the category.
    Matched(&'a TagEntry),
    /// Unmatched under [`UnmatchedPolicy::Force`]; value for the `type` tag.
    Forced(&'a str),
    /// Unmatched under [`UnmatchedPolicy::Ignore`].
    Ignored,
}

/// Category absent from the table under [`UnmatchedPolicy::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Category '{category}' has no OSM tag mapping")]
pub struct UnmatchedCategory {
    pub category: String,
}

impl CategoryLookup {
    /// Look up `category` and apply `policy` when it has no entry.
    pub fn resolve<'a>(
        &'a self,
        category: &'a str,
        policy: UnmatchedPolicy,
    ) -> Result<CategoryResolution<'a>, UnmatchedCategory> {
        if let Some(tags) = self.lookup(category) {
            return Ok(CategoryResolution::Matched(tags));
        }
        match policy {
            UnmatchedPolicy::Ignore => Ok(CategoryResolution::Ignored),
            UnmatchedPolicy::Force => Ok(CategoryResolution::Forced(category)),
            UnmatchedPolicy::Error => Err(UnmatchedCategory {
                category: category.to_string(),
            }),
        }
    }
}
