//! Row-to-file reconciliation.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info, info_span, warn};

use adprep_model::{
    FailureReason, FolderEntry, MatchKey, Progress, ReconciliationResult, RenamedFile, Row,
    RowFailure, SkippedRow,
};

use crate::error::{ReconcileError, Result};
use crate::folder::{DiskFolder, FolderStore};

/// Pairs rows with folder files by stem and renames each file to its match key.
#[derive(Debug)]
pub struct ReconciliationEngine<F> {
    folder: F,
}

impl<F: FolderStore> ReconciliationEngine<F> {
    pub fn new(folder: F) -> Self {
        Self { folder }
    }

    pub fn folder(&self) -> &F {
        &self.folder
    }

    pub fn into_inner(self) -> F {
        self.folder
    }

    pub fn reconcile(&mut self, rows: &[Row]) -> Result<ReconciliationResult> {
        self.reconcile_with_progress(rows, |_| {})
    }

    /// Reconciles `rows` in order, calling `on_progress` once per row before
    /// the row is processed.
    ///
    /// For each row with both keys present, the folder is re-listed and the
    /// first entry whose stem equals the row's Description is renamed to
    /// `"{Description}-{AD ID}"` plus its own extension. A file that already
    /// carries the match key as its stem counts as renamed without touching
    /// the filesystem, which makes repeated runs report the same outcome.
    /// When several entries share a stem, listing order decides.
    ///
    /// Unmatched files are the stems present before any rename that no row
    /// uses as its Description.
    ///
    /// # Errors
    ///
    /// Fails only if the folder cannot be listed before the first row.
    /// Per-row problems are recorded in the result.
    pub fn reconcile_with_progress(
        &mut self,
        rows: &[Row],
        mut on_progress: impl FnMut(Progress),
    ) -> Result<ReconciliationResult> {
        let total = rows.len();
        let span = info_span!("reconcile", rows = total);
        let _guard = span.enter();

        let initial = self
            .folder
            .list()
            .map_err(|source| ReconcileError::InitialListing { source })?;
        let initial_file_count = initial.len();
        let initial_stems: BTreeSet<String> = initial
            .iter()
            .map(|entry| entry.stem().to_string())
            .collect();
        let all_descriptions: BTreeSet<&str> = rows.iter().map(Row::description).collect();

        let mut renamed = Vec::new();
        let mut failures = Vec::new();
        let mut skipped = Vec::new();

        for (idx, row) in rows.iter().enumerate() {
            on_progress(Progress::new(idx + 1, total));
            let line = row.line();

            let Some(key) = row.match_key() else {
                debug!(line, "missing Description or AD ID, skipping row");
                skipped.push(SkippedRow { line });
                continue;
            };
            let description = row.description();

            let entries = match self.folder.list() {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(line, %error, "failed to list folder");
                    failures.push(RowFailure {
                        line,
                        description: description.to_string(),
                        reason: FailureReason::FolderUnreadable {
                            message: error.to_string(),
                        },
                    });
                    continue;
                }
            };

            let Some(entry) = locate(&entries, description, &key) else {
                warn!(line, description, "no file found for Description");
                failures.push(RowFailure {
                    line,
                    description: description.to_string(),
                    reason: FailureReason::NoFileMatch,
                });
                continue;
            };

            let from = entry.file_name();
            let to = key.file_name(entry.extension());
            if from == to {
                debug!(line, file = %from, "file already has the target name");
                renamed.push(RenamedFile {
                    line,
                    from,
                    to,
                    renamed: false,
                });
                continue;
            }

            match self.folder.rename(&from, &to) {
                Ok(()) => {
                    info!(line, from = %from, to = %to, "renamed file");
                    renamed.push(RenamedFile {
                        line,
                        from,
                        to,
                        renamed: true,
                    });
                }
                Err(error) => {
                    warn!(line, from = %from, to = %to, %error, "rename failed");
                    failures.push(RowFailure {
                        line,
                        description: description.to_string(),
                        reason: FailureReason::RenameFailed {
                            from,
                            to,
                            message: error.to_string(),
                        },
                    });
                }
            }
        }

        let unmatched_files: Vec<String> = initial_stems
            .into_iter()
            .filter(|stem| !all_descriptions.contains(stem.as_str()))
            .collect();

        info!(
            renamed = renamed.len(),
            failed = failures.len(),
            skipped = skipped.len(),
            unmatched_files = unmatched_files.len(),
            "reconciliation complete"
        );

        Ok(ReconciliationResult::new(
            renamed,
            failures,
            skipped,
            unmatched_files,
            initial_file_count,
        ))
    }
}

/// First entry whose stem is the Description, else the first already
/// carrying the match key.
fn locate<'a>(
    entries: &'a [FolderEntry],
    description: &str,
    key: &MatchKey,
) -> Option<&'a FolderEntry> {
    entries
        .iter()
        .find(|entry| entry.stem() == description)
        .or_else(|| entries.iter().find(|entry| entry.stem() == key.as_str()))
}

/// Reconciles `rows` against the folder at `folder_path`.
///
/// # Errors
///
/// Returns [`ReconcileError::FolderNotFound`] if the folder does not exist.
pub fn reconcile(rows: &[Row], folder_path: &Path) -> Result<ReconciliationResult> {
    reconcile_with_progress(rows, folder_path, |_| {})
}

/// [`reconcile`] with a per-row progress callback.
pub fn reconcile_with_progress(
    rows: &[Row],
    folder_path: &Path,
    on_progress: impl FnMut(Progress),
) -> Result<ReconciliationResult> {
    let folder = DiskFolder::open(folder_path)?;
    ReconciliationEngine::new(folder).reconcile_with_progress(rows, on_progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<FolderEntry> {
        names.iter().map(|n| FolderEntry::from_file_name(n)).collect()
    }

    #[test]
    fn test_locate_prefers_description_stem() {
        let entries = entries(&["clipA-99.mp4", "clipA.mov"]);
        let key = MatchKey::new("clipA", "99").unwrap();
        let found = locate(&entries, "clipA", &key).unwrap();
        assert_eq!(found.file_name(), "clipA.mov");
    }

    #[test]
    fn test_locate_falls_back_to_match_key() {
        let entries = entries(&["clipA-99.mp4"]);
        let key = MatchKey::new("clipA", "99").unwrap();
        let found = locate(&entries, "clipA", &key).unwrap();
        assert_eq!(found.file_name(), "clipA-99.mp4");
    }

    #[test]
    fn test_locate_uses_listing_order_for_ties() {
        let entries = entries(&["clipA.mov", "clipA.mp4"]);
        let key = MatchKey::new("clipA", "1").unwrap();
        assert_eq!(locate(&entries, "clipA", &key).unwrap().extension(), ".mov");
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        let entries = entries(&["CLIPA.mp4"]);
        let key = MatchKey::new("clipA", "1").unwrap();
        assert!(locate(&entries, "clipA", &key).is_none());
    }
}
