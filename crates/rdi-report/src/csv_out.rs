//! Cleaned-CSV output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use tracing::debug;

use rdi_model::CodeTable;

/// Write a table as CSV, creating parent directories as needed.
///
/// Missing cells are written as empty fields; short rows are padded to the
/// header width. Returns the written path.
pub fn write_code_table(path: &Path, table: &CodeTable) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create csv: {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .context("write csv header")?;
    for row in &table.rows {
        let mut record = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            record.push(row.get(idx).and_then(|cell| cell.as_deref()).unwrap_or(""));
        }
        writer.write_record(&record).context("write csv record")?;
    }
    writer.flush().context("flush csv")?;
    debug!(path = %path.display(), records = table.record_count(), "csv written");
    Ok(path.to_path_buf())
}
