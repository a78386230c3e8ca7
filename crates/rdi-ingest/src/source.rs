//! Data-source selection: local files or the upstream GitHub repository.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use rdi_model::{CodeTable, Dataset};

use crate::csv_table::read_code_table;
use crate::remote::fetch_code_table;

/// GitHub repository owner of the upstream data.
const REPO_OWNER: &str = "redoio";

/// GitHub repository name.
const REPO_NAME: &str = "resentencing_data_initiative";

/// Branch that hosts the published datasets.
const REPO_BRANCH: &str = "main";

/// Where the commitment CSVs are loaded from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// CSV files under a local data directory.
    Local { data_dir: PathBuf },
    /// Raw files from the upstream GitHub repository.
    Github,
}

impl DataSource {
    pub fn local(data_dir: impl Into<PathBuf>) -> Self {
        DataSource::Local {
            data_dir: data_dir.into(),
        }
    }

    /// Short identifier for logs and the run summary.
    pub fn describe(&self) -> String {
        match self {
            DataSource::Local { data_dir } => data_dir.display().to_string(),
            DataSource::Github => format!("github.com/{REPO_OWNER}/{REPO_NAME}"),
        }
    }

    /// Path of a dataset under the local data directory.
    pub fn local_path(data_dir: &Path, dataset: Dataset) -> PathBuf {
        data_dir.join(format!("{}.csv", dataset.file_stem()))
    }

    /// Raw URL of a dataset in the upstream repository.
    fn raw_url(dataset: Dataset) -> String {
        format!(
            "https://raw.githubusercontent.com/{REPO_OWNER}/{REPO_NAME}/{REPO_BRANCH}/data/{}.csv",
            dataset.file_stem()
        )
    }

    /// Load one dataset from this source.
    pub fn load(&self, dataset: Dataset) -> Result<CodeTable> {
        match self {
            DataSource::Local { data_dir } => {
                read_code_table(&Self::local_path(data_dir, dataset))
            }
            DataSource::Github => fetch_code_table(&Self::raw_url(dataset))
                .with_context(|| format!("fetch {dataset} commitments")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_urls_point_at_the_data_directory() {
        assert_eq!(
            DataSource::raw_url(Dataset::Current),
            "https://raw.githubusercontent.com/redoio/resentencing_data_initiative/main/data/current_commitments.csv"
        );
        assert_eq!(
            DataSource::raw_url(Dataset::Prior),
            "https://raw.githubusercontent.com/redoio/resentencing_data_initiative/main/data/prior_commitments.csv"
        );
    }

    #[test]
    fn local_paths_join_the_data_directory() {
        let path = DataSource::local_path(Path::new("data"), Dataset::Prior);
        assert_eq!(path, Path::new("data").join("prior_commitments.csv"));
    }
}
