//! Feature names.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::schema::Record;

/// Name variant of a naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameVariant {
    Alternate,
    Common,
    Official,
    Short,
}

impl NameVariant {
    /// Lowercase schema spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameVariant::Alternate => "alternate",
            NameVariant::Common => "common",
            NameVariant::Official => "official",
            NameVariant::Short => "short",
        }
    }
}

impl fmt::Display for NameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "alternate" => Ok(NameVariant::Alternate),
            "common" => Ok(NameVariant::Common),
            "official" => Ok(NameVariant::Official),
            "short" => Ok(NameVariant::Short),
            _ => Err(format!("Unknown name variant: {s}")),
        }
    }
}

/// A name that applies under some condition (language, side, linear range).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameRule {
    pub variant: NameVariant,
    pub language: Option<String>,
    pub value: String,
    /// Linearly referenced range `[start, end]` the name applies to.
    pub between: Option<[f64; 2]>,
    pub side: Option<String>,
}

/// Primary name plus localized and rule-based alternatives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Names {
    pub primary: String,
    /// Locale tag to name.
    pub common: Option<BTreeMap<String, String>>,
    pub rules: Option<Vec<NameRule>>,
}

impl Record for Names {}

impl Record for NameRule {}
