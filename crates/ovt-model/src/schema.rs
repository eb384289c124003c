//! Deserialization entry point and the value constraints serde cannot express.
//!
//! Records derive `Deserialize` with `deny_unknown_fields`, so member
//! presence, JSON types and unknown members are enforced while deserializing,
//! with the offending path recorded by `serde_path_to_error`. Ranges, patterns
//! and lengths are checked afterwards by [`Record::check`].
//!
//! The members shared by every theme (`id`, `version`, `theme`, `type`) are
//! declared on each record rather than flattened, because serde does not
//! combine `flatten` with `deny_unknown_fields`.

use regex::Regex;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

use crate::error::{FieldPath, Result, ValidationError, Violation};
use crate::patterns;

/// A schema record: deserialized strictly, then checked for value constraints.
pub trait Record: DeserializeOwned {
    /// Check the constraints of a record located at `path`.
    fn check(&self, _path: &FieldPath) -> Result<()> {
        Ok(())
    }

    /// Validate a standalone document into this record.
    fn from_value(value: &Value) -> Result<Self> {
        let record: Self = serde_path_to_error::deserialize(value)?;
        record.check(&FieldPath::root())?;
        Ok(record)
    }
}

/// Check every record of a sequence located at `path`.
pub fn check_each<T: Record>(path: &FieldPath, items: &[T]) -> Result<()> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| item.check(&path.index(index)))
}

/// Check that a sequence has at least one item.
pub fn check_non_empty<T>(path: &FieldPath, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(ValidationError::new(path.clone(), Violation::Empty));
    }
    Ok(())
}

/// Check `min <= value <= max` (either bound optional).
pub fn check_range(path: &FieldPath, value: f64, min: Option<f64>, max: Option<f64>) -> Result<()> {
    let below = min.is_some_and(|min| value < min);
    let above = max.is_some_and(|max| value > max);
    if below || above || value.is_nan() {
        return Err(ValidationError::new(
            path.clone(),
            Violation::OutOfRange { value, min, max },
        ));
    }
    Ok(())
}

/// Check that `value` matches `regex` (searched, so unanchored patterns match prefixes).
pub fn check_pattern(path: &FieldPath, value: &str, regex: &'static Regex) -> Result<()> {
    if regex.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::new(
        path.clone(),
        Violation::PatternMismatch {
            value: value.to_string(),
            pattern: regex.as_str(),
        },
    ))
}

/// Check a sequence length against inclusive bounds.
pub fn check_length(path: &FieldPath, actual: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&actual) {
        return Ok(());
    }
    Err(ValidationError::new(
        path.clone(),
        Violation::Length { min, max, actual },
    ))
}

/// Check the optional feature `id` member of a record at `path`.
pub fn check_id(path: &FieldPath, id: Option<&str>) -> Result<()> {
    match id {
        Some(id) => check_pattern(&path.key("id"), id, &patterns::ID),
        None => Ok(()),
    }
}

/// Deserialize JSON `null` the same as an absent member.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
