//! Spreadsheet ingestion
//!
//! Reads the first worksheet of an xlsx file with calamine, discards the
//! header row, and converts cells into JSON values truncated to the schema
//! width.

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::Value;
use std::path::Path;

use crate::conversion::config::MissingCellPolicy;
use crate::error::{ConvertError, ConvertResult};

/// Read the data rows of a spreadsheet as JSON values.
///
/// The first sheet row is treated as a header and skipped. Each remaining
/// row is cut down to the first `width` columns; rows shorter than `width`
/// are padded with nulls or rejected depending on `policy`.
pub fn read_rows(
    path: &Path,
    width: usize,
    policy: MissingCellPolicy,
) -> ConvertResult<Vec<Vec<Value>>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| ConvertError::workbook(path.to_path_buf(), e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ConvertError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| ConvertError::workbook(path.to_path_buf(), e))?;

    let mut rows = Vec::new();

    // skip(1): the header row is discarded, column names come from the schema
    for (index, sheet_row) in range.rows().enumerate().skip(1) {
        let row_number = index + 1; // 1-based, as shown in spreadsheet editors

        if sheet_row.len() < width && policy == MissingCellPolicy::Strict {
            return Err(ConvertError::ColumnCount {
                path: path.to_path_buf(),
                row: row_number,
                found: sheet_row.len(),
                expected: width,
            });
        }

        let mut cells = Vec::with_capacity(width);
        for (col, cell) in sheet_row.iter().take(width).enumerate() {
            if let Data::Error(e) = cell {
                return Err(ConvertError::ErrorCell {
                    path: path.to_path_buf(),
                    row: row_number,
                    col: col + 1,
                    message: e.to_string(),
                });
            }
            cells.push(cell_to_json(cell));
        }

        // Pad short rows up to the schema width
        cells.resize(width, Value::Null);
        rows.push(cells);
    }

    Ok(rows)
}

/// Convert a single cell to a JSON value, preserving the cell type.
///
/// Whole-number floats collapse to JSON integers; Excel stores every number
/// as a float, so `42` would otherwise come out as `42.0`.
pub fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => float_to_json(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => float_to_json(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(e) => Value::String(format!("#ERROR {}", e)),
    }
}

fn float_to_json(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Value::Number((f as i64).into())
    } else {
        serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
