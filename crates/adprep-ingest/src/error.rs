//! Error types for spreadsheet and folder ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading spreadsheets or listing folders.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spreadsheet file not found.
    #[error("spreadsheet not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// File extension is not a supported spreadsheet format.
    #[error("unsupported spreadsheet format '{extension}': {path} (expected .csv, .xlsx, .xls)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// UTF-16 encoded files are not supported.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheets.
    #[error("workbook has no worksheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// File has no header row.
    #[error("spreadsheet is empty: {path}")]
    EmptyTable { path: PathBuf },

    // === Schema Errors ===
    /// Table has fewer columns than row validation requires.
    #[error("spreadsheet must have at least {required} columns, found {found}")]
    TooFewColumns { found: usize, required: usize },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Maps an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn file(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns true for errors caused by a malformed table rather than I/O.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::TooFewColumns { .. })
    }
}
