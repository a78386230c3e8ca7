//! Offense-code normalization.
//!
//! This crate provides the cleaning logic for the commitment pipeline:
//!
//! - **offense**: the pure offense-code cleaner
//! - **apply**: applying the cleaner across a table column

pub mod apply;
pub mod offense;

pub use apply::{ColumnStats, append_clean_column};
pub use offense::clean_offense_code;
