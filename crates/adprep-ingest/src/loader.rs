//! Format dispatch for spreadsheet inputs.

use std::path::Path;

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::table::Table;
use crate::workbook::read_workbook_table;

/// Spreadsheet formats accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Csv,
    Workbook,
}

impl SpreadsheetFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// Reads a spreadsheet into a [`Table`], choosing the reader by extension.
pub fn read_table(path: &Path) -> Result<Table> {
    let format = SpreadsheetFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default(),
    })?;
    let table = match format {
        SpreadsheetFormat::Csv => read_csv_table(path)?,
        SpreadsheetFormat::Workbook => read_workbook_table(path)?,
    };
    tracing::info!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "spreadsheet loaded"
    );
    Ok(table)
}
