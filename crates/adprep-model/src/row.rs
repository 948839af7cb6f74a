//! Spreadsheet rows and the canonical match key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spreadsheet column names consumed by name (case- and spelling-exact).
pub mod source_columns {
    pub const DESCRIPTION: &str = "Description";
    pub const AD_ID: &str = "AD ID";
    pub const PLACEMENT: &str = "Placement(s)";
    pub const SPOT_RUNNING: &str = "Spot Running";
    pub const AD_NAME: &str = "Ad Name";
    pub const OBJECTIVE: &str = "Objective";
    pub const TRT: &str = "TRT";
    pub const YEAR: &str = "Year";
    pub const WRIKE_LINK: &str = "Link to Wrike Project";
    pub const SUB_INITIATIVE: &str = "Sub-Initiative";
    pub const LOCATION_TYPE: &str = "Location Type";
    pub const LEAD_OFFER_MESSAGE: &str = "Lead Offer Message";
    pub const LEAD_FINANCE_MESSAGE: &str = "Lead Finance Message";
}

/// One spreadsheet record with values normalized to strings.
///
/// Cells keep the column order of the source table. Lookups by column name
/// return the first cell with that name; absent columns resolve to blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line: usize,
    cells: Vec<(String, String)>,
}

impl Row {
    /// Creates a row from ordered `(column, value)` pairs.
    ///
    /// `line` is the 1-based spreadsheet line (the header occupies line 1).
    pub fn new(line: usize, cells: Vec<(String, String)>) -> Self {
        Self { line, cells }
    }

    /// Creates a row by pairing header names with values.
    ///
    /// Missing trailing values are filled with blanks; surplus values are dropped.
    pub fn from_columns(line: usize, headers: &[String], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let cells = headers
            .iter()
            .map(|header| (header.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { line, cells }
    }

    /// Spreadsheet line number used in reports.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Raw (untrimmed) value of a column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed value of a column; blank when the column is absent.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or("")
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Trimmed `Description` value.
    pub fn description(&self) -> &str {
        self.value(source_columns::DESCRIPTION)
    }

    /// Trimmed `AD ID` value.
    pub fn ad_id(&self) -> &str {
        self.value(source_columns::AD_ID)
    }

    /// Canonical target stem, or `None` when either key is blank.
    pub fn match_key(&self) -> Option<MatchKey> {
        MatchKey::new(self.description(), self.ad_id())
    }
}

/// Canonical target stem `"{Description}-{AD ID}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchKey(String);

impl MatchKey {
    /// Builds a key from trimmed parts; `None` if either part is blank.
    pub fn new(description: &str, ad_id: &str) -> Option<Self> {
        let description = description.trim();
        let ad_id = ad_id.trim();
        if description.is_empty() || ad_id.is_empty() {
            return None;
        }
        Some(Self(format!("{description}-{ad_id}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Target filename for a file carrying `extension` (including the dot, or empty).
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.0, extension)
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MatchKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
