//! Integration tests for the cleaning pipeline.

use std::fs;
use std::path::Path;

use rdi_cli::pipeline::{
    OFFENSE_CLEAN_COLUMN, OutputConfig, ingest, normalize, output,
};
use rdi_ingest::DataSource;
use rdi_model::{CleaningSummary, Dataset};

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("current_commitments.csv"),
        "id,offense\n1,PC187(A)\n2,vc10851\n3,\n4,459\n",
    )
    .expect("write current fixture");
    fs::write(
        dir.join("prior_commitments.csv"),
        "id,offense\n1,HS11378(B)(1)\n2,459\n",
    )
    .expect("write prior fixture");
}

#[test]
fn pipeline_cleans_both_datasets() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixtures(dir.path());
    let source = DataSource::local(dir.path());
    let out_dir = dir.path().join("out");

    let ingested = ingest(&source).expect("ingest");
    assert_eq!(ingested.tables.len(), 2);

    let normalized = normalize(ingested).expect("normalize");
    assert_eq!(normalized.summaries.len(), 2);
    let current = &normalized.summaries[0];
    assert_eq!(current.dataset, Dataset::Current);
    assert_eq!(current.records, 4);
    assert_eq!(current.missing, 1);
    assert_eq!(current.changed, 2);
    assert_eq!(current.distinct_raw, 3);
    assert_eq!(current.distinct_clean, 3);
    // Examples only include rows where cleaning changed the value.
    assert!(normalized
        .examples
        .contains(&("PC187(A)".to_string(), "187".to_string())));
    assert!(!normalized
        .examples
        .iter()
        .any(|(raw, _)| raw == "459"));

    let summary = CleaningSummary {
        datasets: normalized.summaries.clone(),
    };
    let written = output(
        &normalized,
        &summary,
        &OutputConfig {
            output_dir: &out_dir,
            dry_run: false,
            skip_summary_json: false,
        },
    );
    assert!(written.errors.is_empty());
    assert_eq!(written.paths.len(), 2);

    let current_clean =
        fs::read_to_string(out_dir.join("current_commitments_clean.csv")).expect("read output");
    let mut lines = current_clean.lines();
    assert_eq!(lines.next(), Some("id,offense,offense_clean"));
    assert_eq!(lines.next(), Some("1,PC187(A),187"));
    assert_eq!(lines.next(), Some("2,vc10851,10851"));
    // The missing offense stays missing in both columns.
    assert_eq!(lines.next(), Some("3,,"));
    assert_eq!(lines.next(), Some("4,459,459"));

    let summary_path = written.summary_json.expect("summary path");
    let body = fs::read_to_string(summary_path).expect("read summary");
    let round: CleaningSummary = serde_json::from_str(&body).expect("parse summary");
    assert_eq!(round.total_records(), 6);
    assert_eq!(round.total_changed(), 3);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixtures(dir.path());
    let source = DataSource::local(dir.path());
    let out_dir = dir.path().join("out");

    let normalized = normalize(ingest(&source).expect("ingest")).expect("normalize");
    let summary = CleaningSummary {
        datasets: normalized.summaries.clone(),
    };
    let written = output(
        &normalized,
        &summary,
        &OutputConfig {
            output_dir: &out_dir,
            dry_run: true,
            skip_summary_json: false,
        },
    );

    assert!(written.paths.is_empty());
    assert!(written.summary_json.is_none());
    assert!(!out_dir.exists());
    // The cleaned column is still present in memory.
    let (_, table) = &normalized.tables[0];
    assert!(table.has_column(OFFENSE_CLEAN_COLUMN));
}

#[test]
fn missing_dataset_aborts_ingest() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("current_commitments.csv"),
        "id,offense\n1,PC187\n",
    )
    .expect("write current fixture");
    // No prior_commitments.csv.

    let error = ingest(&DataSource::local(dir.path())).expect_err("missing prior dataset");
    assert!(format!("{error:#}").contains("prior"));
}

#[test]
fn dataset_without_offense_column_fails_normalize() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("current_commitments.csv"), "id,code\n1,PC187\n")
        .expect("write current fixture");
    fs::write(dir.path().join("prior_commitments.csv"), "id,offense\n1,459\n")
        .expect("write prior fixture");

    let ingested = ingest(&DataSource::local(dir.path())).expect("ingest");
    let error = normalize(ingested).expect_err("no offense column");
    assert!(format!("{error:#}").contains("current"));
}
