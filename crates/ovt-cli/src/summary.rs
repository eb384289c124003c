//! Terminal tables for subcommand results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ovt_cli::pipeline::{ConversionReport, ValidationReport};
use ovt_tags::CategoryLookup;

/// Print input/output paths and feature counts of a conversion.
pub fn print_conversion_summary(report: &ConversionReport) {
    println!("Input: {}", report.input.display());
    println!("Output: {}", report.output.display());

    let summary = &report.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Features"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(format!("Converted {}s", report.kind)),
        count_cell(summary.converted, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (confidence)"),
        count_cell(summary.dropped_confidence, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (unmatched category)"),
        count_cell(summary.dropped_unmatched, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Print counts and one row per invalid feature.
pub fn print_validation_summary(report: &ValidationReport) {
    println!("Input: {}", report.input.display());
    println!(
        "{} of {} {} features valid",
        report.valid(),
        report.total,
        report.kind
    );
    if report.is_valid() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Feature"),
        header_cell("Field"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, error) in &report.failures {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(error.path.to_string()).fg(Color::Yellow),
            Cell::new(error.violation.to_string()).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

/// Print one row per category.
pub fn print_categories(lookup: &CategoryLookup) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("OSM tags")]);
    apply_table_style(&mut table);
    for (category, tags) in lookup.iter() {
        let tags: Vec<String> = tags.iter().map(|(key, value)| format!("{key}={value}")).collect();
        table.add_row(vec![Cell::new(category), Cell::new(tags.join("\n"))]);
    }
    println!("{table}");
    println!("{} categories", lookup.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
