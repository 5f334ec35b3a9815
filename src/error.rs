//! Error types for the material export pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a material dump into a workbook
#[derive(Error, Debug)]
pub enum ExportError {
    /// Source TSV file does not exist
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// A structural column (ID, Parent, Type, Tier) is absent from the source table
    #[error("source table has no '{0}' column")]
    MissingRequiredColumn(String),

    /// A view selects a column the source table does not have
    #[error("view '{view}' selects column '{column}', which the source table does not have")]
    MissingColumn { view: String, column: String },

    /// View catalog file is malformed or fails validation
    #[error("invalid view catalog '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TSV parse error
    #[error("failed to read TSV: {0}")]
    Tsv(#[from] csv::Error),

    /// Workbook write error
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
