//! Accounting produced by one reconciliation pass.

use std::fmt;

use serde::Serialize;

/// A row whose file now carries its match key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedFile {
    /// Spreadsheet line of the row.
    pub line: usize,
    /// Filename found in the folder.
    pub from: String,
    /// Filename after reconciliation.
    pub to: String,
    /// False when the file already had its target name and nothing was renamed.
    pub renamed: bool,
}

/// Why a row could not be reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// No folder entry has the row's Description as its stem.
    NoFileMatch,
    /// The filesystem rejected the rename.
    RenameFailed {
        from: String,
        to: String,
        message: String,
    },
    /// The folder could not be listed while scanning for this row.
    FolderUnreadable { message: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFileMatch => f.write_str("no file found for Description"),
            Self::RenameFailed { from, to, message } => {
                write!(f, "failed to rename '{from}' to '{to}': {message}")
            }
            Self::FolderUnreadable { message } => write!(f, "failed to list folder: {message}"),
        }
    }
}

/// A row-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    pub line: usize,
    pub description: String,
    pub reason: FailureReason,
}

/// A row left out because its Description or AD ID is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: usize,
}

/// Immutable summary of a reconciliation pass.
///
/// Every input row appears in exactly one of `renamed`, `failures` or `skipped`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    renamed: Vec<RenamedFile>,
    failures: Vec<RowFailure>,
    skipped: Vec<SkippedRow>,
    unmatched_files: Vec<String>,
    initial_file_count: usize,
}

impl ReconciliationResult {
    pub fn new(
        renamed: Vec<RenamedFile>,
        failures: Vec<RowFailure>,
        skipped: Vec<SkippedRow>,
        unmatched_files: Vec<String>,
        initial_file_count: usize,
    ) -> Self {
        Self {
            renamed,
            failures,
            skipped,
            unmatched_files,
            initial_file_count,
        }
    }

    pub fn renamed(&self) -> &[RenamedFile] {
        &self.renamed
    }

    pub fn failures(&self) -> &[RowFailure] {
        &self.failures
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Stems, from before any rename, of files that no row's Description refers to.
    pub fn unmatched_files(&self) -> &[String] {
        &self.unmatched_files
    }

    /// Number of files in the folder before any rename.
    pub fn initial_file_count(&self) -> usize {
        self.initial_file_count
    }

    /// Rows whose file carries its match key, including already-named files.
    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }

    /// Rows whose file already had its target name.
    pub fn already_named_count(&self) -> usize {
        self.renamed.iter().filter(|file| !file.renamed).count()
    }

    /// Total rows accounted for.
    pub fn row_count(&self) -> usize {
        self.renamed.len() + self.failures.len() + self.skipped.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
