//! Files in the asset folder.

/// A file in the asset folder, identified by its stem and extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderEntry {
    stem: String,
    extension: String,
}

impl FolderEntry {
    /// Splits a filename into stem and extension.
    ///
    /// The extension starts at the last dot, unless everything before that
    /// dot is itself dots (`.hidden` has no extension).
    pub fn from_file_name(file_name: &str) -> Self {
        let (stem, extension) = split_file_name(file_name);
        Self {
            stem: stem.to_string(),
            extension: extension.to_string(),
        }
    }

    /// Filename without its extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Extension including the leading dot, or empty.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }
}

/// Splits `name` into `(stem, extension)`; the extension keeps its dot.
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if !name[..idx].chars().all(|c| c == '.') => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_last_extension() {
        assert_eq!(split_file_name("clipA.mp4"), ("clipA", ".mp4"));
        assert_eq!(split_file_name("a.b.mov"), ("a.b", ".mov"));
        assert_eq!(split_file_name("noext"), ("noext", ""));
        assert_eq!(split_file_name("trailing."), ("trailing", "."));
    }

    #[test]
    fn test_leading_dots_belong_to_stem() {
        assert_eq!(split_file_name(".hidden"), (".hidden", ""));
        assert_eq!(split_file_name("..double"), ("..double", ""));
        assert_eq!(split_file_name(".config.json"), (".config", ".json"));
    }

    #[test]
    fn test_entry_round_trips_file_name() {
        let entry = FolderEntry::from_file_name("Spot 1.MP4");
        assert_eq!(entry.stem(), "Spot 1");
        assert_eq!(entry.extension(), ".MP4");
        assert_eq!(entry.file_name(), "Spot 1.MP4");
    }
}
