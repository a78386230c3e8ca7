use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CleanResult;

/// Print the run summary tables.
pub fn print_summary(result: &CleanResult) {
    println!("Source: {}", result.source);
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.summary_json {
        println!("Summary report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Records"),
        header_cell("Missing"),
        header_cell("Distinct raw"),
        header_cell("Distinct clean"),
        header_cell("Changed"),
        header_cell("CSV"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);
    let mut total_records = 0usize;
    let mut total_changed = 0usize;
    for outcome in &result.datasets {
        let summary = &outcome.summary;
        total_records += summary.records;
        total_changed += summary.changed;
        table.add_row(vec![
            Cell::new(summary.dataset.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.records),
            count_cell(summary.missing, Color::Yellow),
            Cell::new(summary.distinct_raw),
            Cell::new(summary.distinct_clean),
            count_cell(summary.changed, Color::Green),
            output_cell(outcome.output.as_deref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_changed).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_examples(result);
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

/// Show sample transformations so a reviewer can eyeball the rule set.
fn print_examples(result: &CleanResult) {
    if result.examples.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Raw"), header_cell("Cleaned")]);
    apply_table_style(&mut table);
    for (raw, clean) in &result.examples {
        table.add_row(vec![Cell::new(raw), Cell::new(clean)]);
    }
    println!();
    println!("Example transformations:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color)
    } else {
        dim_cell(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
