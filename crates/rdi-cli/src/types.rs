use std::path::PathBuf;

use rdi_model::{Dataset, DatasetSummary};

/// Result of one `clean` run.
#[derive(Debug)]
pub struct CleanResult {
    /// Where the datasets were loaded from.
    pub source: String,
    pub output_dir: PathBuf,
    pub datasets: Vec<DatasetOutcome>,
    /// Sample transformations (raw, cleaned) where the value changed.
    pub examples: Vec<(String, String)>,
    /// Path of the JSON run summary, when written.
    pub summary_json: Option<PathBuf>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

/// Outcome for one dataset.
#[derive(Debug)]
pub struct DatasetOutcome {
    pub dataset: Dataset,
    pub summary: DatasetSummary,
    /// Path of the cleaned CSV, when written.
    pub output: Option<PathBuf>,
}
