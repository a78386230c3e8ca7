//! CSV parsing into [`CodeTable`] values.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use rdi_model::CodeTable;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read a commitment CSV from disk.
///
/// The first row is the header; cells are trimmed and BOM-stripped, and
/// empty cells ingest as missing.
pub fn read_code_table(path: &Path) -> Result<CodeTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open csv: {}", path.display()))?;
    parse_code_table(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Parse CSV content from any reader.
///
/// Short records are padded with missing cells; extra cells beyond the
/// header width are dropped.
pub fn parse_code_table(reader: impl Read) -> Result<CodeTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .context("read csv header")?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = CodeTable::new(headers);
    for record in csv_reader.records() {
        let record = record.context("read csv record")?;
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            row.push(record.get(idx).and_then(normalize_cell));
        }
        table.rows.push(row);
    }
    Ok(table)
}
