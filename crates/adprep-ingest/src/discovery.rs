//! Asset folder listing.

use std::path::Path;

use adprep_model::FolderEntry;

use crate::error::{IngestError, Result};

/// Lists the regular files directly inside `dir` (no recursion).
///
/// Entries keep the order the operating system returns them in; callers
/// that pick the first entry with a given stem inherit that order.
/// Filenames that are not valid UTF-8 are skipped.
pub fn list_folder_entries(dir: &Path) -> Result<Vec<FolderEntry>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => files.push(FolderEntry::from_file_name(name)),
            None => tracing::warn!(
                path = %path.display(),
                "skipping file with a non UTF-8 name"
            ),
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["clipA.mp4", "clipB.mov", "notes"] {
            std::fs::write(dir.path().join(name), "data").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("inner.mp4"), "data").unwrap();
        dir
    }

    #[test]
    fn test_lists_files_only() {
        let dir = create_test_dir();
        let mut stems: Vec<String> = list_folder_entries(dir.path())
            .unwrap()
            .iter()
            .map(|entry| entry.stem().to_string())
            .collect();
        stems.sort();
        assert_eq!(stems, vec!["clipA", "clipB", "notes"]);
    }

    #[test]
    fn test_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_folder_entries(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("clip.mp4");
        std::fs::write(&file_path, "data").unwrap();

        let result = list_folder_entries(&file_path);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
