//! Settings file loading.
//!
//! Settings live in the platform config directory as `settings.toml`:
//! - macOS: ~/Library/Application Support/com.adprep.adprep/
//! - Windows: %APPDATA%/adprep/adprep/config/
//! - Linux: ~/.config/adprep/
//!
//! ```toml
//! [overrides]
//! year = "2025"
//! location_type = "Retail"
//!
//! [export]
//! output_dir = "/srv/exports"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use adprep_model::OverrideSet;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "adprep";
const APP_NAME: &str = "adprep";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Batch overrides used when the command line gives none.
    pub overrides: OverrideSet,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory for generated export files instead of Downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Default settings file location, if the platform has one.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parses settings from TOML text.
///
/// # Errors
///
/// Returns the TOML error for malformed content.
pub fn parse_settings(content: &str) -> std::result::Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// Loads settings from an explicitly requested file.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings = parse_settings(&content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Loads settings from the default location.
///
/// Returns default settings if the file is missing, unreadable, malformed,
/// or the platform directory cannot be determined.
pub fn load_default_settings() -> Settings {
    let Some(path) = settings_path() else {
        warn!("could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_or_default(&path)
}

/// Loads settings from `path`, falling back to defaults on any problem.
pub fn load_settings_or_default(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to parse settings file, using defaults");
                Settings::default()
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => Settings::default(),
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to read settings file, using defaults");
            Settings::default()
        }
    }
}

/// Loads `explicit` strictly when given, else the default location leniently.
///
/// # Errors
///
/// Fails only for an explicit path that cannot be read or parsed.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings_from(path),
        None => Ok(load_default_settings()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_settings() {
        let settings = parse_settings(
            r#"
            [overrides]
            year = "2025"
            wrike_link = " https://example.com/w "

            [export]
            output_dir = "/srv/exports"
            "#,
        )
        .unwrap();

        assert_eq!(settings.overrides.year(), Some("2025"));
        assert_eq!(settings.overrides.wrike_link(), Some("https://example.com/w"));
        assert_eq!(settings.overrides.location_type(), None);
        assert_eq!(
            settings.export.output_dir.as_deref(),
            Some(Path::new("/srv/exports"))
        );
    }

    #[test]
    fn test_empty_settings_are_default() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_blank_override_is_absent() {
        let settings = parse_settings("[overrides]\nyear = \"  \"\n").unwrap();
        assert_eq!(settings.overrides.year(), None);
        assert!(settings.overrides.is_empty());
    }

    #[test]
    fn test_malformed_default_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[overrides\nyear = 2025").unwrap();

        assert_eq!(load_settings_or_default(&path), Settings::default());
        assert!(load_settings(Some(&path)).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_settings(Some(&dir.path().join("absent.toml"))).is_err());
        assert_eq!(
            load_settings_or_default(&dir.path().join("absent.toml")),
            Settings::default()
        );
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            overrides: OverrideSet::default().with_sub_initiative("Spring"),
            export: ExportSettings {
                output_dir: Some(PathBuf::from("/tmp/out")),
            },
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        assert_eq!(parse_settings(&text).unwrap(), settings);
    }
}
