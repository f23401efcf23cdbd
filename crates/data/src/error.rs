use thiserror::Error;

/// Errors that can occur while loading the workbook
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Worksheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Column '{column}' not found in worksheet '{sheet}'")]
    ColumnNotFound { sheet: String, column: String },

    #[error("Columns not named: {0}")]
    ColumnsNotNamed(String),

    #[error("Duplicate column name: {name}")]
    DuplicateColumnName { name: String },

    #[error("Row index out of bounds: {index} (sheet has {count} rows)")]
    RowIndexOutOfBounds { index: usize, count: usize },

    #[error("Column index out of bounds: {index} (sheet has {count} columns)")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    #[error("Worksheet '{sheet}', row {row}, column '{column}': expected {expected}, got '{got}'")]
    Cell {
        sheet: String,
        row: usize,
        column: String,
        expected: String,
        got: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
