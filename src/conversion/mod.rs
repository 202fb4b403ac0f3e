//! Spreadsheet to JSON conversion module
//!
//! Contains the run configuration and the batch engine.

pub mod config;
pub mod engine;

pub use config::{ConvertConfig, MissingCellPolicy};
pub use engine::{CategoryOutcome, ConvertEngine, RunSummary};
