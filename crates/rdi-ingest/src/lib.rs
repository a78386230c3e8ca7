//! Commitment-data ingestion.
//!
//! Loads the current and prior commitment CSVs from a local data directory
//! or from the raw files of the upstream GitHub repository.

pub mod csv_table;
pub mod remote;
pub mod source;

pub use csv_table::{parse_code_table, read_code_table};
pub use remote::fetch_code_table;
pub use source::DataSource;
