//! Flat OSM tag mappings and the builder the rule sets write into.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Finished OSM tags for one feature, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMap(BTreeMap<String, String>);

impl TagMap {
    /// Value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The tags as a JSON object of strings.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect(),
        )
    }
}

impl IntoIterator for TagMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Mutable tag accumulator. Later writes to a key replace earlier ones.
#[derive(Debug, Default)]
pub struct TagBuilder {
    tags: BTreeMap<String, String>,
}

impl TagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Set `key` unless `value` is empty.
    pub fn set_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.set(key, value);
        }
        self
    }

    pub fn set_integer(&mut self, key: &str, value: i64) -> &mut Self {
        self.set(key, value.to_string())
    }

    /// Set `key` to `value` rounded to two decimals.
    pub fn set_decimal(&mut self, key: &str, value: f64) -> &mut Self {
        self.set(key, format_decimal(value))
    }

    /// Merge every tag of `entry`, replacing existing keys.
    pub fn extend<'a>(&mut self, entry: impl IntoIterator<Item = (&'a String, &'a String)>) -> &mut Self {
        self.tags
            .extend(entry.into_iter().map(|(key, value)| (key.clone(), value.clone())));
        self
    }

    /// Freeze the builder into the feature's tags.
    pub fn finish(self) -> TagMap {
        TagMap(self.tags)
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shortest decimal rendering of `value` rounded to two places (`4.0` is `"4"`).
pub fn format_decimal(value: f64) -> String {
    round2(value).to_string()
}
