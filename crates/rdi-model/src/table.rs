//! In-memory tabular data.

use crate::error::{RdiError, Result};

/// An ordered set of headers plus rows of optional cells.
///
/// Empty CSV cells are represented as `None` so missing values survive the
/// pipeline without collapsing into empty strings.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl CodeTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    /// Case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (row, column); `None` for missing values and short rows.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(Option::as_deref)
    }

    /// Append a derived column with one value per row.
    ///
    /// Short rows are padded to the current width first so the new column
    /// stays aligned. The header must not collide with an existing one.
    pub fn push_column(
        &mut self,
        header: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Result<()> {
        let header = header.into();
        if self.has_column(&header) {
            return Err(RdiError::Message(format!(
                "column {header:?} already exists"
            )));
        }
        if values.len() != self.rows.len() {
            return Err(RdiError::Message(format!(
                "column {header:?} has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }
        let width = self.headers.len();
        self.headers.push(header);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.resize(width, None);
            row.push(value);
        }
        Ok(())
    }
}
