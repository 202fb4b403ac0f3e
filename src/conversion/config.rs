//! Configuration options for the batch conversion run

use std::path::PathBuf;

/// How to handle rows with fewer columns than the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCellPolicy {
    /// Pad short rows with JSON nulls
    PadNull,
    /// Fail the run on the first short row
    Strict,
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Folder containing the `data_<category>.xlsx` inputs
    pub data_folder: PathBuf,
    /// Folder receiving the `<category>.json` outputs
    pub output_folder: PathBuf,
    /// Spaces per indentation level in the JSON output (0-8)
    pub indent_size: u8,
    /// Handling of rows shorter than the schema
    pub missing_cells: MissingCellPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from("../raw_data"),
            output_folder: PathBuf::from("../input_data"),
            indent_size: 4,
            missing_cells: MissingCellPolicy::PadNull,
        }
    }
}

impl ConvertConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input data folder
    pub fn with_data_folder(mut self, folder: PathBuf) -> Self {
        self.data_folder = folder;
        self
    }

    /// Set the output folder
    pub fn with_output_folder(mut self, folder: PathBuf) -> Self {
        self.output_folder = folder;
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Self {
        self.indent_size = size;
        self
    }

    /// Set the missing-cell policy
    pub fn with_missing_cells(mut self, policy: MissingCellPolicy) -> Self {
        self.missing_cells = policy;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.data_folder.as_os_str().is_empty() {
            return Err("Data folder must not be empty".to_string());
        }

        if self.output_folder.as_os_str().is_empty() {
            return Err("Output folder must not be empty".to_string());
        }

        Ok(())
    }

    /// Indentation unit for the JSON pretty printer
    pub fn indent_unit(&self) -> Vec<u8> {
        vec![b' '; self.indent_size as usize]
    }
}
