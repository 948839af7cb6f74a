//! Metadata export output.
//!
//! Export files are semicolon-delimited with the fixed header from
//! [`EXPORT_COLUMNS`](adprep_model::EXPORT_COLUMNS) and one line per record.
//! By default they land in the user's Downloads directory under a
//! timestamped name.

mod error;
mod path;
mod writer;

pub use error::{OutputError, Result};
pub use path::{EXPORT_FILE_PREFIX, default_export_path, downloads_dir, export_file_name};
pub use writer::{EXPORT_DELIMITER, write_export, write_records};
