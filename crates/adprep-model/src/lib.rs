//! Shared types for ad asset preparation.
//!
//! - [`Row`] and [`MatchKey`]: spreadsheet records and the canonical file stem
//! - [`FolderEntry`]: a file in the asset folder
//! - [`OverrideSet`]: batch-wide values that take precedence over row values
//! - [`ExportRecord`]: one fixed-schema metadata export row
//! - [`ReconciliationResult`]: accounting for a rename pass
//! - [`Progress`]: per-row progress signal

pub mod export;
pub mod folder;
pub mod overrides;
pub mod progress;
pub mod reconciliation;
pub mod row;

pub use export::{
    EXPORT_COLUMN_COUNT, EXPORT_COLUMNS, ExportRecord, ExportRecordBuilder, export_column_index,
    export_columns,
};
pub use folder::{FolderEntry, split_file_name};
pub use overrides::OverrideSet;
pub use progress::Progress;
pub use reconciliation::{FailureReason, ReconciliationResult, RenamedFile, RowFailure, SkippedRow};
pub use row::{MatchKey, Row, source_columns};
