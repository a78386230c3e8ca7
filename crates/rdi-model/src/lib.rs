pub mod category;
pub mod dataset;
pub mod error;
pub mod summary;
pub mod table;

pub use category::StatuteCategory;
pub use dataset::Dataset;
pub use error::{RdiError, Result};
pub use summary::{CleaningSummary, DatasetSummary};
pub use table::CodeTable;
