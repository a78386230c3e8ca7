//! The commitment datasets processed by the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two commitment datasets published upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Current,
    Prior,
}

impl Dataset {
    /// Both datasets in processing order.
    pub const ALL: [Dataset; 2] = [Dataset::Current, Dataset::Prior];

    /// File stem of the source CSV (`<stem>.csv`).
    pub fn file_stem(self) -> &'static str {
        match self {
            Dataset::Current => "current_commitments",
            Dataset::Prior => "prior_commitments",
        }
    }

    /// File name of the cleaned output CSV.
    pub fn clean_file_name(self) -> String {
        format!("{}_clean.csv", self.file_stem())
    }

    /// Display label for summary tables.
    pub fn label(self) -> &'static str {
        match self {
            Dataset::Current => "Current commitments",
            Dataset::Prior => "Prior commitments",
        }
    }

    /// Short identifier for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Current => "current",
            Dataset::Prior => "prior",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
