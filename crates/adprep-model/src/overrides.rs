//! Batch-wide override values.

use serde::{Deserialize, Serialize};

/// Values supplied once for a whole batch that take precedence over the
/// matching spreadsheet column of every row.
///
/// Blank values are treated as absent, both when built in code and when
/// deserialized from a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    wrike_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_initiative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_type: Option<String>,
}

impl OverrideSet {
    #[must_use]
    pub fn with_wrike_link(mut self, value: impl Into<String>) -> Self {
        self.wrike_link = normalize(value.into());
        self
    }

    #[must_use]
    pub fn with_year(mut self, value: impl Into<String>) -> Self {
        self.year = normalize(value.into());
        self
    }

    #[must_use]
    pub fn with_sub_initiative(mut self, value: impl Into<String>) -> Self {
        self.sub_initiative = normalize(value.into());
        self
    }

    #[must_use]
    pub fn with_location_type(mut self, value: impl Into<String>) -> Self {
        self.location_type = normalize(value.into());
        self
    }

    pub fn wrike_link(&self) -> Option<&str> {
        present(self.wrike_link.as_deref())
    }

    pub fn year(&self) -> Option<&str> {
        present(self.year.as_deref())
    }

    pub fn sub_initiative(&self) -> Option<&str> {
        present(self.sub_initiative.as_deref())
    }

    pub fn location_type(&self) -> Option<&str> {
        present(self.location_type.as_deref())
    }

    /// Returns true if no override is present.
    pub fn is_empty(&self) -> bool {
        self.wrike_link().is_none()
            && self.year().is_none()
            && self.sub_initiative().is_none()
            && self.location_type().is_none()
    }

    /// Fills every absent field from `fallback`, keeping fields already present.
    #[must_use]
    pub fn or(self, fallback: &OverrideSet) -> Self {
        Self {
            wrike_link: pick(self.wrike_link, fallback.wrike_link()),
            year: pick(self.year, fallback.year()),
            sub_initiative: pick(self.sub_initiative, fallback.sub_initiative()),
            location_type: pick(self.location_type, fallback.location_type()),
        }
    }
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn pick(primary: Option<String>, fallback: Option<&str>) -> Option<String> {
    primary
        .and_then(normalize)
        .or_else(|| fallback.map(str::to_string))
}
