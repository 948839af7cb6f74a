//! Spreadsheet and asset folder ingestion.
//!
//! # Features
//!
//! - **Table Loading**: Read `.csv` or Excel/OpenDocument workbooks into a uniform [`Table`]
//! - **Row Filtering**: Keep rows whose first three columns are non-blank
//! - **Folder Discovery**: List the files of an asset folder in listing order
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use adprep_ingest::{filter_rows, list_folder_entries, read_table};
//!
//! let table = read_table(Path::new("plan.xlsx"))?;
//! let rows = filter_rows(&table)?;
//! let files = list_folder_entries(Path::new("renders"))?;
//! ```

mod csv_table;
mod discovery;
mod error;
mod filter;
mod loader;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Loading ===
pub use csv_table::read_csv_table;
pub use loader::{SpreadsheetFormat, read_table};
pub use table::{CellValue, Table, format_numeric};
pub use workbook::read_workbook_table;

// === Row Filtering ===
pub use filter::{REQUIRED_COLUMNS, filter_rows};

// === Folder Discovery ===
pub use discovery::list_folder_entries;
