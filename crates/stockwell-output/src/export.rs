//! Export of tabular reports.
//!
//! Any [`Tabular`] report can be saved as an `.xlsx` workbook, CSV, or
//! JSON with the same row/column shape the report displays.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::table::{CellValue, Tabular};

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Workbook write error.
    #[error("Workbook write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Exported bytes were not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The requested format has no string form.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Excel workbook with a single sheet.
    Xlsx,

    /// Comma-separated values.
    Csv,

    /// JSON array of header-keyed objects.
    Json,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Infer the format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "xlsx" => Some(Self::Xlsx),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Export a table to a string.
///
/// # Errors
///
/// Returns [`ExportError::InvalidFormat`] for [`ExportFormat::Xlsx`]
/// (workbooks are binary; use [`export_to_file`]), or a serialization
/// error.
pub fn export_to_string(table: &dyn Tabular, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(table.headers())?;
            for row in table.rows() {
                wtr.write_record(row.iter().map(ToString::to_string))?;
            }
            Ok(String::from_utf8(
                wtr.into_inner().map_err(|e| e.into_error())?,
            )?)
        }
        ExportFormat::Json => {
            let headers = table.headers();
            let objects: Vec<serde_json::Value> = table
                .rows()
                .iter()
                .map(|row| {
                    headers
                        .iter()
                        .zip(row)
                        .map(|(header, cell)| {
                            Ok((header.clone(), serde_json::to_value(cell)?))
                        })
                        .collect::<Result<serde_json::Map<_, _>, serde_json::Error>>()
                        .map(serde_json::Value::Object)
                })
                .collect::<Result<_, _>>()?;
            Ok(serde_json::to_string_pretty(&objects)?)
        }
        ExportFormat::Xlsx => Err(ExportError::InvalidFormat(
            "xlsx has no string form".to_string(),
        )),
    }
}

/// Export a table to a file in the given format.
///
/// # Errors
///
/// Returns an error if serialization or file writing fails.
pub fn export_to_file(
    table: &dyn Tabular,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Xlsx => {
            let mut workbook = Workbook::new();
            let sheet = workbook.add_worksheet().set_name(table.sheet_name())?;
            for (column, header) in table.headers().iter().enumerate() {
                sheet.write_string(0, column as u16, header)?;
            }
            for (row_no, row) in table.rows().iter().enumerate() {
                for (column, cell) in row.iter().enumerate() {
                    let (row_no, column) = (row_no as u32 + 1, column as u16);
                    match cell {
                        CellValue::Text(text) => {
                            sheet.write_string(row_no, column, text)?;
                        }
                        CellValue::Int(value) => {
                            sheet.write_number(row_no, column, *value as f64)?;
                        }
                        CellValue::Float(value) => {
                            sheet.write_number(row_no, column, *value)?;
                        }
                        CellValue::Empty => {}
                    }
                }
            }
            workbook.save(path)?;
            Ok(())
        }
        ExportFormat::Csv | ExportFormat::Json => {
            let content = export_to_string(table, format)?;
            let mut file = File::create(path)?;
            file.write_all(content.as_bytes())?;
            Ok(())
        }
    }
}
