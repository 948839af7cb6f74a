//! Excel/OpenDocument workbook reading (first worksheet only).

use std::path::Path;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{IngestError, Result};
use crate::table::{CellValue, Table, normalize_header};

/// Reads the first worksheet of a workbook, treating its first row as the header.
pub fn read_workbook_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet) = sheet_names.first() else {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: format!("sheet '{sheet}': {e}"),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell.to_string()))
        .collect();
    let rows: Vec<Vec<CellValue>> = rows.map(|row| row.iter().map(cell_value).collect()).collect();

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        columns = headers.len(),
        rows = rows.len(),
        "read workbook table"
    );
    Ok(Table::new(headers, rows))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Blank,
        Data::String(s) => CellValue::text(s),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match excel_datetime(dt) {
            Some(value) => CellValue::text(&format_datetime(value)),
            None => CellValue::text(&dt.to_string()),
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(value) => CellValue::text(&format_datetime(value)),
            None => CellValue::text(s),
        },
        // Durations and error cells keep calamine's display form.
        other => CellValue::text(&other.to_string()),
    }
}

fn excel_datetime(dt: &ExcelDateTime) -> Option<NaiveDateTime> {
    if dt.is_datetime() { dt.as_datetime() } else { None }
}

/// ODS stores dates as ISO 8601 text.
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// `MM/DD/YYYY`, with the time appended only when it is not midnight.
fn format_datetime(value: NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%m/%d/%Y").to_string()
    } else {
        value.format("%m/%d/%Y %H:%M").to_string()
    }
}
