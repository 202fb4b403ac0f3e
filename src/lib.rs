//! hebconv
//!
//! Converts the Hebrew vocabulary dataset spreadsheets into JSON category
//! files with schema-renamed columns.

pub mod conversion;
pub mod error;
pub mod reader;
pub mod schema;

// Re-export commonly used types
pub use conversion::{CategoryOutcome, ConvertConfig, ConvertEngine, MissingCellPolicy, RunSummary};
pub use error::{ConvertError, ConvertResult};
pub use schema::Category;
