//! File-level conversion and validation.
//!
//! 1. **Read**: parse the input feature collection
//! 2. **Convert** or **Validate**: apply a rule set (or schema) to every feature
//! 3. **Write**: store the converted collection (conversion only)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ovt_convert::{BatchSummary, FeatureCollection, RuleSet, convert_collection};
use ovt_model::{FeatureKind, ValidationError, validate};
use tracing::{info, info_span, warn};

use crate::io::{read_collection, write_collection};

/// Outcome of converting one file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub kind: FeatureKind,
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: BatchSummary,
}

/// Convert the collection at `input` with `rules` and write it to `output`.
///
/// `output` may equal `input`. Nothing is written when a feature fails
/// validation or when every feature was dropped.
pub fn convert_file<R>(input: &Path, output: &Path, rules: &R) -> Result<ConversionReport>
where
    R: RuleSet + ?Sized,
{
    let span = info_span!("convert_file", kind = %rules.kind(), input = %input.display());
    let _guard = span.enter();

    let collection = read_collection(input)?;
    let result = convert_collection(collection, rules)
        .with_context(|| format!("convert {}", input.display()))?;

    if result.collection.features.is_empty() {
        bail!(
            "no {} features left after conversion ({} read, {} dropped); {} was not written",
            rules.kind(),
            result.summary.total,
            result.summary.dropped(),
            output.display()
        );
    }

    write_collection(output, &result.collection)?;
    info!(
        output = %output.display(),
        features = result.summary.converted,
        "wrote converted collection"
    );

    Ok(ConversionReport {
        kind: rules.kind(),
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        summary: result.summary,
    })
}

/// Schema failures found in one file.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub kind: FeatureKind,
    pub input: PathBuf,
    pub total: usize,
    /// Feature index and the first problem found in it.
    pub failures: Vec<(usize, ValidationError)>,
}

impl ValidationReport {
    /// Number of features that passed validation.
    pub fn valid(&self) -> usize {
        self.total - self.failures.len()
    }

    /// Whether every feature passed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate every feature's properties in `collection` against `kind`.
pub fn validate_collection(
    collection: &FeatureCollection,
    kind: FeatureKind,
) -> Vec<(usize, ValidationError)> {
    collection
        .features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            validate(kind, &feature.properties)
                .err()
                .map(|error| (index, error))
        })
        .collect()
}

/// Validate the collection at `input` without converting it.
pub fn validate_file(input: &Path, kind: FeatureKind) -> Result<ValidationReport> {
    let span = info_span!("validate_file", %kind, input = %input.display());
    let _guard = span.enter();

    let collection = read_collection(input)?;
    let failures = validate_collection(&collection, kind);
    for (index, error) in &failures {
        warn!(index, %error, "invalid feature");
    }
    info!(
        total = collection.features.len(),
        invalid = failures.len(),
        "validated collection"
    );

    Ok(ValidationReport {
        kind,
        input: input.to_path_buf(),
        total: collection.features.len(),
        failures,
    })
}
