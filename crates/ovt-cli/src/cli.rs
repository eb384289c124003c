//! CLI argument definitions for overture2osm.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ovt_cli::logging::LogFormat;
use ovt_convert::options::DEFAULT_REGION_TAG;
use ovt_model::FeatureKind;
use ovt_tags::UnmatchedPolicy;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "overture2osm",
    version,
    about = "Convert Overture Maps GeoJSON properties to OpenStreetMap tags",
    long_about = "Convert Overture Maps GeoJSON properties to OpenStreetMap tags.\n\n\
                  Supports place, building and address features. Features below the\n\
                  confidence threshold, or with unmatched categories under\n\
                  --unmatched error, are dropped from the output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert Overture place features.
    Place(PlaceArgs),

    /// Convert Overture building features.
    Building(BuildingArgs),

    /// Convert Overture address features.
    Address(AddressArgs),

    /// Print the category to OSM tag table.
    ///
    /// The built-in table covers a curated subset of Overture categories
    /// (about 90). Pass `--categories` or set OVERTURE2OSM_CATEGORIES to use a
    /// complete table; with `--unmatched error` any category missing from the
    /// table drops its place.
    Categories(CategoriesArgs),

    /// Check feature properties against the schema without converting.
    Validate(ValidateArgs),
}

/// Input file and where to write the result.
#[derive(Args)]
pub struct IoArgs {
    /// GeoJSON FeatureCollection to convert.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub target: OutputTarget,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct OutputTarget {
    /// Write the converted collection here.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file.
    #[arg(long = "in-place")]
    pub in_place: bool,
}

impl IoArgs {
    pub fn output_path(&self) -> &Path {
        self.target.output.as_deref().unwrap_or(&self.input)
    }
}

#[derive(Args)]
pub struct PlaceArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Drop places whose confidence is below this value (0.0 to 1.0).
    #[arg(short = 'c', long = "confidence", default_value_t = 0.0, value_parser = parse_confidence)]
    pub confidence: f64,

    /// Tag that receives the address region.
    #[arg(short = 'r', long = "region-tag", default_value = DEFAULT_REGION_TAG)]
    pub region_tag: String,

    /// Handling of categories missing from the table. The built-in table
    /// only covers common categories.
    #[arg(short = 'u', long = "unmatched", value_enum, default_value = "ignore")]
    pub unmatched: UnmatchedArg,

    /// JSON category table to use instead of the built-in one
    /// (default: $OVERTURE2OSM_CATEGORIES, then the built-in table).
    #[arg(long = "categories", value_name = "PATH")]
    pub categories: Option<PathBuf>,
}

#[derive(Args)]
pub struct BuildingArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Drop buildings with any source confidence below this value (0.0 to 1.0).
    #[arg(short = 'c', long = "confidence", default_value_t = 0.0, value_parser = parse_confidence)]
    pub confidence: f64,
}

#[derive(Args)]
pub struct AddressArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Addressing style; `US` maps the first address level to addr:state.
    #[arg(short = 's', long = "style", default_value = "US")]
    pub style: String,
}

#[derive(Args)]
pub struct CategoriesArgs {
    /// JSON category table to print instead of the built-in one.
    #[arg(long = "categories", value_name = "PATH")]
    pub categories: Option<PathBuf>,

    /// Only show categories containing this text.
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Print the table as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Feature kind the properties must match.
    #[arg(value_enum)]
    pub kind: KindArg,

    /// GeoJSON FeatureCollection to check.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,
}

/// CLI feature kinds.
#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Place,
    Building,
    Address,
}

impl From<KindArg> for FeatureKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Place => FeatureKind::Place,
            KindArg::Building => FeatureKind::Building,
            KindArg::Address => FeatureKind::Address,
        }
    }
}

/// CLI unmatched-category policies.
#[derive(Clone, Copy, ValueEnum)]
pub enum UnmatchedArg {
    Ignore,
    Force,
    Error,
}

impl From<UnmatchedArg> for UnmatchedPolicy {
    fn from(policy: UnmatchedArg) -> Self {
        match policy {
            UnmatchedArg::Ignore => UnmatchedPolicy::Ignore,
            UnmatchedArg::Force => UnmatchedPolicy::Force,
            UnmatchedArg::Error => UnmatchedPolicy::Error,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn parse_confidence(value: &str) -> Result<f64, String> {
    let confidence: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=1.0).contains(&confidence) {
        Ok(confidence)
    } else {
        Err(format!("confidence must be between 0.0 and 1.0, got {confidence}"))
    }
}
