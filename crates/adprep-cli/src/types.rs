use serde::Serialize;

use adprep_cli::pipeline::ExportReport;
use adprep_model::ReconciliationResult;

/// What one command invocation did.
#[derive(Debug, Serialize)]
pub struct CommandOutcome {
    /// Rows kept after filtering.
    pub valid_rows: usize,
    /// Data rows in the spreadsheet.
    pub total_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<ReconciliationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportReport>,
}

impl CommandOutcome {
    pub fn new(valid_rows: usize, total_rows: usize) -> Self {
        Self {
            valid_rows,
            total_rows,
            rename: None,
            export: None,
        }
    }
}
