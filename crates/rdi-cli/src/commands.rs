use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use rdi_ingest::DataSource;
use rdi_model::{CleaningSummary, StatuteCategory};

use crate::cli::{CleanArgs, SourceArg};
use crate::pipeline::{OutputConfig, ingest, normalize, output};
use crate::summary::apply_table_style;
use crate::types::{CleanResult, DatasetOutcome};

/// List the recognized statutory category abbreviations.
pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Abbreviation", "Body of law"]);
    apply_table_style(&mut table);
    for category in StatuteCategory::ALL {
        table.add_row(vec![category.abbreviation(), category.body_of_law()]);
    }
    println!("{table}");
    Ok(())
}

/// Run the cleaning pipeline over both commitment datasets.
pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let source = match args.source {
        SourceArg::Local => DataSource::local(args.data_dir.clone()),
        SourceArg::Github => DataSource::Github,
    };
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_dir.clone());
    let clean_span = info_span!("clean", source = %source.describe());
    let _clean_guard = clean_span.enter();

    let ingested = ingest(&source)?;
    let normalized = normalize(ingested)?;
    let summary = CleaningSummary {
        datasets: normalized.summaries.clone(),
    };
    let written = output(
        &normalized,
        &summary,
        &OutputConfig {
            output_dir: &output_dir,
            dry_run: args.dry_run,
            skip_summary_json: args.no_summary_json,
        },
    );

    let mut datasets = Vec::with_capacity(normalized.summaries.len());
    for dataset_summary in normalized.summaries {
        let output_path = written
            .paths
            .iter()
            .find(|(dataset, _)| *dataset == dataset_summary.dataset)
            .map(|(_, path)| path.clone());
        datasets.push(DatasetOutcome {
            dataset: dataset_summary.dataset,
            summary: dataset_summary,
            output: output_path,
        });
    }
    let has_errors = !written.errors.is_empty();
    Ok(CleanResult {
        source: source.describe(),
        output_dir,
        datasets,
        examples: normalized.examples,
        summary_json: written.summary_json,
        errors: written.errors,
        has_errors,
    })
}
