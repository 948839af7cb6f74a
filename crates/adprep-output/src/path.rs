//! Default export destination.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use directories::{BaseDirs, UserDirs};

/// Prefix of generated export filenames.
pub const EXPORT_FILE_PREFIX: &str = "adVideo_metadataPrepped";

/// Timestamped export filename, e.g. `adVideo_metadataPrepped_20250401_093000.csv`.
pub fn export_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{EXPORT_FILE_PREFIX}_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

/// The user's Downloads directory.
///
/// Falls back to `~/Downloads` when the platform reports none, and to the
/// current directory when there is no home directory either.
pub fn downloads_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Export path in `dir` stamped with the current local time.
pub fn default_export_path(dir: &Path) -> PathBuf {
    dir.join(export_file_name(&Local::now()))
}
