//! Error types for property document validation.

use std::fmt;

use serde_path_to_error::Segment;
use thiserror::Error;

/// One step in a path into a property document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member.
    Key(String),
    /// Array element.
    Index(usize),
}

/// Location of a value inside a property document, e.g. `sources[1].confidence`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to a member of the object at this path.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Path to an element of the array at this path.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// Convert the path `serde_path_to_error` recorded while deserializing.
    pub fn from_serde(path: &serde_path_to_error::Path) -> Self {
        path.iter().fold(Self::root(), |current, segment| match segment {
            Segment::Seq { index } => current.index(*index),
            Segment::Map { key } => current.key(key),
            Segment::Enum { .. } => current,
            _ => current.key("?"),
        })
    }

    /// Whether this is the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// The constraint a document value violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// Required field is absent.
    #[error("field required")]
    Missing,

    /// Value could not be deserialized (wrong JSON type, unknown enum variant, ...).
    #[error("{message}")]
    Invalid { message: String },

    /// Numeric value outside its allowed bounds.
    #[error("value {value} is out of range {}", range_label(.min, .max))]
    OutOfRange {
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },

    /// String value does not match the field pattern.
    #[error("'{value}' does not match pattern {pattern}")]
    PatternMismatch {
        value: String,
        pattern: &'static str,
    },

    /// Sequence has too few or too many items.
    #[error("expected {min} to {max} items, found {actual}")]
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// Sequence must have at least one item.
    #[error("at least one item required")]
    Empty,

    /// Member is not part of the schema.
    #[error("extra fields not permitted")]
    UnknownField,
}

fn range_label(min: &Option<f64>, max: &Option<f64>) -> String {
    match (*min, *max) {
        (Some(min), Some(max)) => format!("[{min}, {max}]"),
        (Some(min), None) => format!(">= {min}"),
        (None, Some(max)) => format!("<= {max}"),
        (None, None) => "(unbounded)".to_string(),
    }
}

/// A property document failed schema validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {violation}")]
pub struct ValidationError {
    pub path: FieldPath,
    pub violation: Violation,
}

impl ValidationError {
    /// Error for `violation` at `path`.
    pub fn new(path: FieldPath, violation: Violation) -> Self {
        Self { path, violation }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ValidationError {
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = FieldPath::from_serde(error.path());
        let message = error.into_inner().to_string();
        if let Some(field) = missing_field(&message) {
            return Self::new(path.key(field), Violation::Missing);
        }
        if message.starts_with("unknown field `") {
            return Self::new(path, Violation::UnknownField);
        }
        Self::new(path, Violation::Invalid { message })
    }
}

/// Field name from serde's "missing field" message.
///
/// serde reports a missing member at the enclosing object, so the name is
/// appended to the path here.
fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.split('`').next()
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
