//! Column-level application of the offense-code cleaner.

use std::collections::BTreeSet;

use tracing::debug;

use rdi_model::{CodeTable, RdiError, Result};

use crate::offense::clean_offense_code;

/// Statistics gathered while cleaning one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnStats {
    pub records: usize,
    /// Rows whose source cell was missing.
    pub missing: usize,
    /// Rows whose cleaned value differs from the raw value.
    pub changed: usize,
    pub distinct_raw: usize,
    pub distinct_clean: usize,
}

/// Clean `source` into a new `target` column appended to the table.
///
/// The source column is located case-insensitively and left untouched;
/// missing cells stay missing in the target column. Distinct counts ignore
/// missing cells.
pub fn append_clean_column(
    table: &mut CodeTable,
    source: &str,
    target: &str,
) -> Result<ColumnStats> {
    let source_idx = table
        .column_index(source)
        .ok_or_else(|| RdiError::Message(format!("column {source:?} not found")))?;
    if table.has_column(target) {
        return Err(RdiError::Message(format!(
            "column {target:?} already exists"
        )));
    }

    let mut stats = ColumnStats {
        records: table.record_count(),
        ..ColumnStats::default()
    };
    let mut distinct_raw = BTreeSet::new();
    let mut distinct_clean = BTreeSet::new();
    let mut cleaned = Vec::with_capacity(stats.records);
    for row in 0..stats.records {
        let raw = table.cell(row, source_idx);
        let clean = clean_offense_code(raw);
        match raw {
            Some(raw_value) => {
                distinct_raw.insert(raw_value.to_string());
                if clean.as_deref() != Some(raw_value) {
                    stats.changed += 1;
                }
            }
            None => stats.missing += 1,
        }
        if let Some(clean_value) = &clean {
            distinct_clean.insert(clean_value.clone());
        }
        cleaned.push(clean);
    }
    stats.distinct_raw = distinct_raw.len();
    stats.distinct_clean = distinct_clean.len();
    table.push_column(target, cleaned)?;
    debug!(
        source,
        target,
        records = stats.records,
        missing = stats.missing,
        changed = stats.changed,
        distinct_raw = stats.distinct_raw,
        distinct_clean = stats.distinct_clean,
        "column cleaned"
    );
    Ok(stats)
}
