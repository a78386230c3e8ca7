//! Tests for CSV and summary output.

use std::fs;

use rdi_ingest::read_code_table;
use rdi_model::{CleaningSummary, CodeTable, Dataset, DatasetSummary};
use rdi_report::{SUMMARY_FILE_NAME, write_code_table, write_summary_json};

fn cleaned_table() -> CodeTable {
    let mut table = CodeTable::new(vec![
        "id".to_string(),
        "offense".to_string(),
        "offense_clean".to_string(),
    ]);
    table.rows.push(vec![
        Some("1".to_string()),
        Some("PC187(A)".to_string()),
        Some("187".to_string()),
    ]);
    table.rows.push(vec![Some("2".to_string()), None, None]);
    table
}

#[test]
fn csv_round_trips_through_ingest() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out").join("current_commitments_clean.csv");

    let written = write_code_table(&path, &cleaned_table()).expect("write csv");
    assert_eq!(written, path);

    let round = read_code_table(&path).expect("read back");
    assert_eq!(round.headers, vec!["id", "offense", "offense_clean"]);
    assert_eq!(round.cell(0, 1), Some("PC187(A)"));
    assert_eq!(round.cell(0, 2), Some("187"));
    // Missing cells stay missing through the round trip.
    assert_eq!(round.cell(1, 1), None);
    assert_eq!(round.cell(1, 2), None);
}

#[test]
fn summary_json_is_parseable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = CleaningSummary {
        datasets: vec![DatasetSummary {
            dataset: Dataset::Prior,
            records: 2,
            missing: 1,
            changed: 1,
            distinct_raw: 1,
            distinct_clean: 1,
        }],
    };

    let path = write_summary_json(dir.path(), &summary).expect("write summary");
    assert!(path.ends_with(SUMMARY_FILE_NAME));

    let body = fs::read_to_string(&path).expect("read summary");
    let round: CleaningSummary = serde_json::from_str(&body).expect("parse summary");
    assert_eq!(round.datasets.len(), 1);
    assert_eq!(round.datasets[0].dataset, Dataset::Prior);
    assert_eq!(round.total_records(), 2);
}
