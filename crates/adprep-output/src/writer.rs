//! Semicolon-delimited export writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use adprep_model::{EXPORT_COLUMNS, ExportRecord};

use crate::error::{OutputError, Result};

/// Field delimiter of the export file.
pub const EXPORT_DELIMITER: u8 = b';';

/// Writes the header and `records` to `writer`.
///
/// The header is written even when there are no records. Fields are quoted
/// only when they contain the delimiter, a quote, or a line break.
///
/// # Errors
///
/// Returns the underlying CSV error if a record cannot be written.
pub fn write_records<W: Write>(writer: W, records: &[ExportRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(EXPORT_DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.values())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes an export file at `path`, creating parent directories.
///
/// An existing file is replaced.
///
/// # Errors
///
/// Returns an [`OutputError`] if the directory or file cannot be created
/// or written.
pub fn write_export(path: &Path, records: &[ExportRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buffered = BufWriter::new(file);
    write_records(&mut buffered, records).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    buffered.flush().map_err(|source| OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "wrote export file");
    Ok(())
}
