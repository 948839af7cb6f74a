//! Lookup of reconciled asset files by stem.

use std::collections::HashMap;

use adprep_model::{FolderEntry, MatchKey};

/// Asset folder entries keyed by stem.
///
/// When several files share a stem, the first in listing order wins.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    by_stem: HashMap<String, FolderEntry>,
    len: usize,
}

impl AssetIndex {
    pub fn new(entries: impl IntoIterator<Item = FolderEntry>) -> Self {
        let mut by_stem = HashMap::new();
        let mut len = 0;
        for entry in entries {
            len += 1;
            by_stem.entry(entry.stem().to_string()).or_insert(entry);
        }
        Self { by_stem, len }
    }

    /// The file whose stem equals `key`.
    pub fn locate(&self, key: &MatchKey) -> Option<&FolderEntry> {
        self.by_stem.get(key.as_str())
    }

    /// Number of files indexed, including shadowed duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<FolderEntry> for AssetIndex {
    fn from_iter<I: IntoIterator<Item = FolderEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}
