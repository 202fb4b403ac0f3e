//! Error types for spreadsheet to JSON conversion

use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to open spreadsheet {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("spreadsheet {path} contains no worksheets")]
    NoWorksheet { path: PathBuf },

    #[error("error cell at row {row}, column {col} in {path}: {message}")]
    ErrorCell {
        path: PathBuf,
        row: usize,
        col: usize,
        message: String,
    },

    #[error("row {row} in {path} has {found} columns, schema expects {expected}")]
    ColumnCount {
        path: PathBuf,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn workbook(path: PathBuf, source: calamine::XlsxError) -> Self {
        Self::Workbook { path, source }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
