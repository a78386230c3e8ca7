//! JSON run-summary output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use rdi_model::CleaningSummary;

/// File name of the JSON run summary.
pub const SUMMARY_FILE_NAME: &str = "cleaning_summary.json";

/// Write the run summary as pretty-printed JSON in `output_dir`.
pub fn write_summary_json(output_dir: &Path, summary: &CleaningSummary) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create dir: {}", output_dir.display()))?;
    let path = output_dir.join(SUMMARY_FILE_NAME);
    let file =
        fs::File::create(&path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary).context("serialize summary")?;
    Ok(path)
}
