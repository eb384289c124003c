//! Subcommand implementations.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::{debug, info};

use ovt_cli::pipeline::{ConversionReport, ValidationReport, convert_file, validate_file};
use ovt_convert::{
    AddressOptions, AddressRules, BuildingOptions, BuildingRules, PlaceOptions, PlaceRules,
};
use ovt_tags::{CategoryLookup, TagEntry};

use crate::cli::{AddressArgs, BuildingArgs, CategoriesArgs, PlaceArgs, ValidateArgs};
use crate::summary::print_categories;

/// Convert a place collection.
pub fn run_place(args: &PlaceArgs) -> Result<ConversionReport> {
    let lookup = ovt_tags::load(args.categories.as_deref()).context("load category table")?;
    debug!(categories = lookup.len(), "category table ready");

    let options = PlaceOptions::new()
        .with_confidence_threshold(args.confidence)
        .with_region_tag(args.region_tag.clone())
        .with_unmatched(args.unmatched.into());
    info!(
        confidence = options.confidence_threshold,
        region_tag = %options.region_tag,
        unmatched = %options.unmatched,
        "converting places"
    );

    let rules = PlaceRules::new(&lookup, options);
    convert_file(&args.io.input, args.io.output_path(), &rules)
}

/// Convert a building collection.
pub fn run_building(args: &BuildingArgs) -> Result<ConversionReport> {
    let options = BuildingOptions::new().with_confidence_threshold(args.confidence);
    info!(confidence = options.confidence_threshold, "converting buildings");
    convert_file(
        &args.io.input,
        args.io.output_path(),
        &BuildingRules::new(options),
    )
}

/// Convert an address collection.
pub fn run_address(args: &AddressArgs) -> Result<ConversionReport> {
    let options = AddressOptions::new().with_style(args.style.clone().into());
    info!(style = %options.style, "converting addresses");
    convert_file(
        &args.io.input,
        args.io.output_path(),
        &AddressRules::new(options),
    )
}

/// Print the category table as a table or JSON.
pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let lookup = ovt_tags::load(args.categories.as_deref()).context("load category table")?;
    let filter = args.filter.as_deref().unwrap_or_default();
    let selected: CategoryLookup = lookup
        .iter()
        .filter(|(category, _)| category.contains(filter))
        .map(|(category, tags)| (category.to_string(), tags.clone()))
        .collect();

    if args.json {
        let table: BTreeMap<&str, &TagEntry> = selected.iter().collect();
        let json = serde_json::to_string_pretty(&table).context("serialize category table")?;
        println!("{json}");
    } else {
        print_categories(&selected);
    }
    Ok(())
}

/// Validate a collection without writing output.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    validate_file(&args.input, args.kind.into())
}
