//! Folder access used by the engine.

use std::io;
use std::path::PathBuf;

use adprep_ingest::list_folder_entries;
use adprep_model::FolderEntry;

use crate::error::{ReconcileError, Result};

/// A mutable view of the asset folder.
///
/// `list` must reflect every rename made through `rename` so far.
pub trait FolderStore {
    /// Current files, in listing order.
    fn list(&self) -> io::Result<Vec<FolderEntry>>;

    /// Renames `from` to `to` within the folder.
    fn rename(&mut self, from: &str, to: &str) -> io::Result<()>;
}

/// The asset folder on disk. Every `list` call re-reads the directory.
#[derive(Debug, Clone)]
pub struct DiskFolder {
    root: PathBuf,
}

impl DiskFolder {
    /// Opens an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::FolderNotFound`] if `path` is not a directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();
        if !root.is_dir() {
            return Err(ReconcileError::FolderNotFound { path: root });
        }
        Ok(Self { root })
    }
}

impl FolderStore for DiskFolder {
    fn list(&self) -> io::Result<Vec<FolderEntry>> {
        list_folder_entries(&self.root).map_err(io::Error::other)
    }

    /// Fails with `AlreadyExists` instead of replacing an existing target.
    fn rename(&mut self, from: &str, to: &str) -> io::Result<()> {
        let source = self.root.join(from);
        let target = self.root.join(to);
        if target.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{to}' already exists"),
            ));
        }
        std::fs::rename(source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_folder() {
        let dir = TempDir::new().unwrap();
        let result = DiskFolder::open(dir.path().join("absent"));
        assert!(matches!(result, Err(ReconcileError::FolderNotFound { .. })));
    }

    #[test]
    fn test_rename_reflected_in_listing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("clipA.mp4"), "data").unwrap();
        let mut folder = DiskFolder::open(dir.path()).unwrap();

        folder.rename("clipA.mp4", "clipA-99.mp4").unwrap();

        let names: Vec<String> = folder
            .list()
            .unwrap()
            .iter()
            .map(FolderEntry::file_name)
            .collect();
        assert_eq!(names, vec!["clipA-99.mp4"]);
    }

    #[test]
    fn test_rename_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("clipA.mp4"), "a").unwrap();
        std::fs::write(dir.path().join("clipA-99.mp4"), "b").unwrap();
        let mut folder = DiskFolder::open(dir.path()).unwrap();

        let err = folder.rename("clipA.mp4", "clipA-99.mp4").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("clipA-99.mp4")).unwrap(),
            "b"
        );
    }

    #[test]
    fn test_rename_missing_source() {
        let dir = TempDir::new().unwrap();
        let mut folder = DiskFolder::open(dir.path()).unwrap();
        assert!(folder.rename("ghost.mp4", "ghost-1.mp4").is_err());
    }
}
