//! Error types for workbook and session operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or writing workbooks.
#[derive(Debug, Error)]
pub enum DataError {
    /// Workbook open or parse error
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// A required sheet is missing from the workbook
    #[error("Missing sheet '{name}' in workbook")]
    MissingSheet {
        /// Name of the missing sheet
        name: String,
    },

    /// A required column header is missing from a sheet
    #[error("Sheet '{sheet}' is missing column '{column}'")]
    MissingColumn {
        /// Sheet the column was expected in
        sheet: String,
        /// Name of the missing column
        column: String,
    },

    /// A cell could not be converted to the expected type
    #[error("Sheet '{sheet}', row {row}, column '{column}': {reason}")]
    Cell {
        /// Sheet containing the cell
        sheet: String,
        /// 1-based workbook row of the cell
        row: usize,
        /// Column header of the cell
        column: String,
        /// What went wrong
        reason: String,
    },

    /// More than one inventory baseline row for the same product
    #[error("Duplicate inventory baseline row for product '{product_id}'")]
    DuplicateBaseline {
        /// Product with the ambiguous baseline
        product_id: String,
    },

    /// Template workbook write error
    #[error("Workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised when a report is requested before any workbook was loaded.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No snapshot is loaded in the session
    #[error("No data loaded; upload a workbook first")]
    NoData,
}
