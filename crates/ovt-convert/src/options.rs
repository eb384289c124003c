//! Per-kind conversion options.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use ovt_tags::UnmatchedPolicy;
use serde::{Deserialize, Serialize};

/// Default tag for a place address's `region`.
pub const DEFAULT_REGION_TAG: &str = "addr:state";

/// Options for converting `place` features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceOptions {
    /// Places with a lower `confidence` are rejected.
    pub confidence_threshold: f64,
    /// Tag that receives the first address's `region`.
    pub region_tag: String,
    /// Handling of categories missing from the table.
    pub unmatched: UnmatchedPolicy,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.0,
            region_tag: DEFAULT_REGION_TAG.to_string(),
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl PlaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_region_tag(mut self, tag: impl Into<String>) -> Self {
        self.region_tag = tag.into();
        self
    }

    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }
}

/// Options for converting `building` features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingOptions {
    /// Buildings with any reported source confidence below this are rejected.
    pub confidence_threshold: f64,
}

impl BuildingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }
}

/// Addressing convention used to place administrative levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AddressStyle {
    /// First address level is the state (`addr:state`).
    #[default]
    Us,
    /// Any other convention; levels are not mapped.
    Other(String),
}

impl AddressStyle {
    pub fn as_str(&self) -> &str {
        match self {
            AddressStyle::Us => "US",
            AddressStyle::Other(style) => style,
        }
    }
}

impl fmt::Display for AddressStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for AddressStyle {
    fn from(style: String) -> Self {
        if style.trim().eq_ignore_ascii_case("us") {
            AddressStyle::Us
        } else {
            AddressStyle::Other(style)
        }
    }
}

impl From<AddressStyle> for String {
    fn from(style: AddressStyle) -> Self {
        style.as_str().to_string()
    }
}

/// Options for converting `address` features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressOptions {
    pub style: AddressStyle,
}

impl AddressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: AddressStyle) -> Self {
        self.style = style;
        self
    }
}
