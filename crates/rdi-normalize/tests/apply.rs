//! Tests for column-level cleaning.

use rdi_model::CodeTable;
use rdi_normalize::append_clean_column;

fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
    cells.iter().map(|cell| cell.map(String::from)).collect()
}

fn commitments() -> CodeTable {
    let mut table = CodeTable::new(vec!["id".to_string(), "Offense".to_string()]);
    table.rows.push(row(&[Some("1"), Some("PC187(A)")]));
    table.rows.push(row(&[Some("2"), Some("pc187(b)")]));
    table.rows.push(row(&[Some("3"), Some("VC10851")]));
    table.rows.push(row(&[Some("4"), None]));
    table.rows.push(row(&[Some("5"), Some("459")]));
    table
}

#[test]
fn appends_clean_column_and_reports_stats() {
    let mut table = commitments();
    let stats = append_clean_column(&mut table, "offense", "offense_clean").expect("clean");

    assert_eq!(stats.records, 5);
    assert_eq!(stats.missing, 1);
    // PC187(A), pc187(b), VC10851 change; 459 and the missing row do not.
    assert_eq!(stats.changed, 3);
    assert_eq!(stats.distinct_raw, 4);
    // PC187(A) and pc187(b) collapse onto 187.
    assert_eq!(stats.distinct_clean, 3);

    let clean_idx = table.column_index("offense_clean").expect("new column");
    assert_eq!(table.cell(0, clean_idx), Some("187"));
    assert_eq!(table.cell(1, clean_idx), Some("187"));
    assert_eq!(table.cell(2, clean_idx), Some("10851"));
    assert_eq!(table.cell(3, clean_idx), None);
    assert_eq!(table.cell(4, clean_idx), Some("459"));
}

#[test]
fn source_column_is_untouched() {
    let mut table = commitments();
    append_clean_column(&mut table, "offense", "offense_clean").expect("clean");

    let offense_idx = table.column_index("offense").expect("source column");
    assert_eq!(table.cell(0, offense_idx), Some("PC187(A)"));
    assert_eq!(table.cell(1, offense_idx), Some("pc187(b)"));
    assert_eq!(table.cell(3, offense_idx), None);
}

#[test]
fn missing_source_column_is_an_error() {
    let mut table = CodeTable::new(vec!["id".to_string()]);
    table.rows.push(row(&[Some("1")]));
    let error = append_clean_column(&mut table, "offense", "offense_clean")
        .expect_err("no offense column");
    assert!(error.to_string().contains("offense"));
}

#[test]
fn existing_target_column_is_an_error() {
    let mut table = commitments();
    append_clean_column(&mut table, "offense", "offense_clean").expect("first pass");
    let error = append_clean_column(&mut table, "offense", "offense_clean")
        .expect_err("second pass");
    assert!(error.to_string().contains("already exists"));
}

#[test]
fn empty_table_yields_zero_stats() {
    let mut table = CodeTable::new(vec!["offense".to_string()]);
    let stats = append_clean_column(&mut table, "offense", "offense_clean").expect("clean");
    assert_eq!(stats.records, 0);
    assert_eq!(stats.distinct_raw, 0);
    assert_eq!(stats.distinct_clean, 0);
}
