//! Row validation: narrows a table to rows usable for matching.

use adprep_model::Row;

use crate::error::{IngestError, Result};
use crate::table::{CellValue, Table};

/// Leading columns that must all be non-blank for a row to be valid.
pub const REQUIRED_COLUMNS: usize = 3;

/// Line of the first data row (the header occupies line 1).
const FIRST_DATA_LINE: usize = 2;

/// Returns the rows whose first three columns are all non-blank after trimming.
///
/// Cell values are normalized to strings first, so blank numeric cells and
/// `nan` count as blank. An empty result is not an error; the caller decides
/// whether that ends the run.
///
/// # Errors
///
/// Returns [`IngestError::TooFewColumns`] if the table has fewer than three columns.
pub fn filter_rows(table: &Table) -> Result<Vec<Row>> {
    let width = table.width();
    if width < REQUIRED_COLUMNS {
        return Err(IngestError::TooFewColumns {
            found: width,
            required: REQUIRED_COLUMNS,
        });
    }

    let mut valid = Vec::new();
    for (idx, cells) in table.rows().iter().enumerate() {
        let line = idx + FIRST_DATA_LINE;
        let values: Vec<String> = (0..width)
            .map(|col| cells.get(col).map(CellValue::to_text).unwrap_or_default())
            .collect();
        if values[..REQUIRED_COLUMNS]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            tracing::trace!(line, "row has a blank required column");
            continue;
        }
        valid.push(Row::from_columns(line, table.headers(), values));
    }

    tracing::info!(
        total = table.height(),
        valid = valid.len(),
        "filtered spreadsheet rows"
    );
    Ok(valid)
}
