//! Cleaning-run statistics.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Per-dataset cleaning statistics.
///
/// Distinct counts ignore missing cells, so they track how many codes the
/// severity-table join will actually see before and after cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset: Dataset,
    pub records: usize,
    /// Rows whose offense cell was missing.
    pub missing: usize,
    /// Rows whose cleaned value differs from the raw value.
    pub changed: usize,
    pub distinct_raw: usize,
    pub distinct_clean: usize,
}

/// Aggregate statistics for one cleaning run, written as the JSON report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub datasets: Vec<DatasetSummary>,
}

impl CleaningSummary {
    pub fn total_records(&self) -> usize {
        self.datasets.iter().map(|summary| summary.records).sum()
    }

    pub fn total_changed(&self) -> usize {
        self.datasets.iter().map(|summary| summary.changed).sum()
    }
}
