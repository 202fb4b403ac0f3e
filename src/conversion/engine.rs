//! Core conversion engine: spreadsheet rows to JSON category files

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

use crate::conversion::config::ConvertConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::reader;
use crate::schema::Category;

/// Result of attempting one category
#[derive(Debug, Clone)]
pub enum CategoryOutcome {
    /// Input was read and the JSON file was written
    Converted {
        input: PathBuf,
        output: PathBuf,
        records: usize,
    },
    /// Input file does not exist; the category was skipped
    MissingInput { input: PathBuf },
}

/// Accumulated results of a full run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(Category, CategoryOutcome)>,
}

impl RunSummary {
    /// Number of categories converted
    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, CategoryOutcome::Converted { .. }))
            .count()
    }

    /// Number of categories skipped for a missing input file
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    /// Total records written across all categories
    pub fn total_records(&self) -> usize {
        self.outcomes
            .iter()
            .map(|(_, o)| match o {
                CategoryOutcome::Converted { records, .. } => *records,
                CategoryOutcome::MissingInput { .. } => 0,
            })
            .sum()
    }
}

/// Batch converter over the fixed category table
pub struct ConvertEngine {
    config: ConvertConfig,
}

impl ConvertEngine {
    /// Create a new engine with a validated configuration
    pub fn new(config: ConvertConfig) -> ConvertResult<Self> {
        config.validate().map_err(ConvertError::configuration)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Spreadsheet path for a category
    pub fn input_path(&self, category: Category) -> PathBuf {
        self.config.data_folder.join(category.input_file_name())
    }

    /// JSON path for a category
    pub fn output_path(&self, category: Category) -> PathBuf {
        self.config.output_folder.join(category.output_file_name())
    }

    /// Convert every listed category sequentially.
    ///
    /// Missing input files are recorded and skipped; any other failure
    /// aborts the run.
    pub fn run(&self, categories: &[Category]) -> ConvertResult<RunSummary> {
        let mut summary = RunSummary::default();
        for &category in categories {
            let outcome = self.convert_category(category)?;
            summary.outcomes.push((category, outcome));
        }
        Ok(summary)
    }

    /// Convert a single category spreadsheet to its JSON file
    pub fn convert_category(&self, category: Category) -> ConvertResult<CategoryOutcome> {
        let input = self.input_path(category);
        if !input.exists() {
            return Ok(CategoryOutcome::MissingInput { input });
        }

        let rows = reader::read_rows(&input, category.width(), self.config.missing_cells)?;
        let records = build_records(category, rows);

        fs::create_dir_all(&self.config.output_folder)
            .map_err(|e| ConvertError::io(self.config.output_folder.clone(), e))?;

        let output = self.output_path(category);
        let bytes = to_pretty_json(&records, &self.config)?;
        fs::write(&output, bytes).map_err(|e| ConvertError::io(output.clone(), e))?;

        Ok(CategoryOutcome::Converted {
            input,
            output,
            records: records.len(),
        })
    }
}

/// Pair each row's values with the schema column names, in schema order.
///
/// Rows are already sized to the schema width by the reader.
fn build_records(category: Category, rows: Vec<Vec<Value>>) -> Vec<Map<String, Value>> {
    let columns = category.columns();
    rows.into_iter()
        .map(|row| {
            columns
                .iter()
                .zip(row)
                .map(|(name, value)| (name.to_string(), value))
                .collect()
        })
        .collect()
}

/// Serialize records as a pretty JSON array.
///
/// Non-ASCII text is written literally (serde_json never escapes it), and
/// the indent unit comes from the configuration.
fn to_pretty_json(records: &[Map<String, Value>], config: &ConvertConfig) -> ConvertResult<Vec<u8>> {
    let indent = config.indent_unit();
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}
