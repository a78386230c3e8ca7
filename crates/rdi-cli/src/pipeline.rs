//! Cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Load the commitment datasets from the selected source
//! 2. **Normalize**: Append the cleaned offense-code column
//! 3. **Output**: Write cleaned CSVs and the JSON run summary
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use rdi_ingest::DataSource;
use rdi_model::{CleaningSummary, CodeTable, Dataset, DatasetSummary};
use rdi_normalize::append_clean_column;
use rdi_report::{write_code_table, write_summary_json};

/// Column holding the raw offense code in the source datasets.
pub const OFFENSE_COLUMN: &str = "offense";

/// Column the cleaned code is written to.
pub const OFFENSE_CLEAN_COLUMN: &str = "offense_clean";

/// Number of example transformations collected for the summary display.
const EXAMPLE_LIMIT: usize = 10;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Loaded datasets in processing order.
    pub tables: Vec<(Dataset, CodeTable)>,
}

/// Load both commitment datasets from the selected source.
///
/// A dataset that cannot be loaded aborts the run; no partial output is
/// produced downstream.
pub fn ingest(source: &DataSource) -> Result<IngestResult> {
    let ingest_span = info_span!("ingest", source = %source.describe());
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();
    let mut tables = Vec::with_capacity(Dataset::ALL.len());
    for dataset in Dataset::ALL {
        let table = source
            .load(dataset)
            .with_context(|| format!("load {dataset} commitments"))?;
        info!(dataset = %dataset, records = table.record_count(), "dataset loaded");
        tables.push((dataset, table));
    }
    info!(
        dataset_count = tables.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult { tables })
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Result of the normalize stage.
#[derive(Debug)]
pub struct NormalizeResult {
    /// Tables augmented with the cleaned column.
    pub tables: Vec<(Dataset, CodeTable)>,
    /// Per-dataset statistics.
    pub summaries: Vec<DatasetSummary>,
    /// Sample transformations (raw, cleaned) where the value changed.
    pub examples: Vec<(String, String)>,
}

/// Append the cleaned offense-code column to every dataset.
pub fn normalize(ingested: IngestResult) -> Result<NormalizeResult> {
    let normalize_span = info_span!("normalize");
    let _normalize_guard = normalize_span.enter();
    let normalize_start = Instant::now();
    let mut tables = Vec::with_capacity(ingested.tables.len());
    let mut summaries = Vec::new();
    let mut examples = Vec::new();
    for (dataset, mut table) in ingested.tables {
        let stats = append_clean_column(&mut table, OFFENSE_COLUMN, OFFENSE_CLEAN_COLUMN)
            .with_context(|| format!("clean {dataset} commitments"))?;
        if examples.len() < EXAMPLE_LIMIT {
            collect_examples(&table, &mut examples);
        }
        debug!(
            dataset = %dataset,
            records = stats.records,
            changed = stats.changed,
            "dataset cleaned"
        );
        summaries.push(DatasetSummary {
            dataset,
            records: stats.records,
            missing: stats.missing,
            changed: stats.changed,
            distinct_raw: stats.distinct_raw,
            distinct_clean: stats.distinct_clean,
        });
        tables.push((dataset, table));
    }
    let total_changed: usize = summaries.iter().map(|summary| summary.changed).sum();
    info!(
        dataset_count = tables.len(),
        changed = total_changed,
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalize complete"
    );
    Ok(NormalizeResult {
        tables,
        summaries,
        examples,
    })
}

/// Collect (raw, cleaned) pairs where cleaning changed the value.
fn collect_examples(table: &CodeTable, examples: &mut Vec<(String, String)>) {
    let Some(raw_idx) = table.column_index(OFFENSE_COLUMN) else {
        return;
    };
    let Some(clean_idx) = table.column_index(OFFENSE_CLEAN_COLUMN) else {
        return;
    };
    for row in 0..table.record_count() {
        if examples.len() >= EXAMPLE_LIMIT {
            break;
        }
        let (Some(raw), Some(clean)) = (table.cell(row, raw_idx), table.cell(row, clean_idx))
        else {
            continue;
        };
        if raw != clean {
            examples.push((raw.to_string(), clean.to_string()));
        }
    }
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Result of the output stage.
#[derive(Debug)]
pub struct OutputResult {
    /// Cleaned CSV path per dataset.
    pub paths: Vec<(Dataset, PathBuf)>,
    /// Path of the JSON run summary, when written.
    pub summary_json: Option<PathBuf>,
    /// Errors encountered while writing.
    pub errors: Vec<String>,
}

/// Output configuration.
pub struct OutputConfig<'a> {
    pub output_dir: &'a Path,
    pub dry_run: bool,
    /// Skip writing the JSON run summary.
    pub skip_summary_json: bool,
}

/// Write cleaned CSVs and the JSON run summary.
pub fn output(
    normalized: &NormalizeResult,
    summary: &CleaningSummary,
    config: &OutputConfig<'_>,
) -> OutputResult {
    let output_span = info_span!("output");
    let _output_guard = output_span.enter();
    let output_start = Instant::now();
    let mut result = OutputResult {
        paths: Vec::new(),
        summary_json: None,
        errors: Vec::new(),
    };
    if config.dry_run {
        info!(
            duration_ms = output_start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return result;
    }
    for (dataset, table) in &normalized.tables {
        let path = config.output_dir.join(dataset.clean_file_name());
        match write_code_table(&path, table) {
            Ok(path) => result.paths.push((*dataset, path)),
            Err(error) => result.errors.push(format!("{dataset}: {error:#}")),
        }
    }
    if !config.skip_summary_json {
        match write_summary_json(config.output_dir, summary) {
            Ok(path) => result.summary_json = Some(path),
            Err(error) => result.errors.push(format!("summary: {error:#}")),
        }
    }
    info!(
        csv_count = result.paths.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    result
}
