//! Pipeline stages shared by the `rename`, `export` and `run` commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use adprep_ingest::{filter_rows, list_folder_entries, read_table};
use adprep_map::{AssetIndex, MappingOutcome, MissingAsset, map_rows};
use adprep_model::{OverrideSet, Progress, ReconciliationResult, Row, SkippedRow};
use adprep_output::{default_export_path, downloads_dir, write_export};
use adprep_reconcile::reconcile_with_progress;

use crate::settings::Settings;

/// Filtered spreadsheet rows.
#[derive(Debug, Clone)]
pub struct LoadedRows {
    pub rows: Vec<Row>,
    /// Data rows in the spreadsheet before filtering.
    pub total_rows: usize,
}

impl LoadedRows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a spreadsheet and keeps the rows usable for matching.
///
/// # Errors
///
/// Fails if the file cannot be read or has fewer than three columns.
pub fn load_rows(spreadsheet: &Path) -> Result<LoadedRows> {
    let span = info_span!("load", path = %spreadsheet.display());
    let _guard = span.enter();

    let table = read_table(spreadsheet)
        .with_context(|| format!("read spreadsheet {}", spreadsheet.display()))?;
    let rows = filter_rows(&table)
        .with_context(|| format!("filter rows of {}", spreadsheet.display()))?;
    info!(valid = rows.len(), total = table.height(), "loaded rows");
    Ok(LoadedRows {
        rows,
        total_rows: table.height(),
    })
}

/// Renames the assets in `folder` to their match keys.
///
/// # Errors
///
/// Fails only if the folder does not exist or cannot be listed.
pub fn rename_assets(
    rows: &[Row],
    folder: &Path,
    on_progress: impl FnMut(Progress),
) -> Result<ReconciliationResult> {
    reconcile_with_progress(rows, folder, on_progress)
        .with_context(|| format!("reconcile folder {}", folder.display()))
}

/// Maps rows to export records using the renamed files in `folder`.
///
/// # Errors
///
/// Fails if the folder cannot be listed.
pub fn map_assets(
    rows: &[Row],
    folder: &Path,
    overrides: &OverrideSet,
    on_progress: impl FnMut(Progress),
) -> Result<MappingOutcome> {
    let entries = list_folder_entries(folder)
        .with_context(|| format!("list asset folder {}", folder.display()))?;
    let assets = AssetIndex::new(entries);
    Ok(map_rows(rows, overrides, &assets, on_progress))
}

/// Outcome of an export written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    /// Records written.
    pub records: usize,
    pub missing: Vec<MissingAsset>,
    pub skipped: Vec<SkippedRow>,
}

/// Maps rows and writes the export file to `destination`.
///
/// # Errors
///
/// Fails if the folder cannot be listed or the file cannot be written.
pub fn export_assets(
    rows: &[Row],
    folder: &Path,
    overrides: &OverrideSet,
    destination: &Path,
    on_progress: impl FnMut(Progress),
) -> Result<ExportReport> {
    let outcome = map_assets(rows, folder, overrides, on_progress)?;
    write_export(destination, &outcome.records)
        .with_context(|| format!("write export {}", destination.display()))?;
    Ok(ExportReport {
        path: destination.to_path_buf(),
        records: outcome.records.len(),
        missing: outcome.missing,
        skipped: outcome.skipped,
    })
}

/// Command-line overrides, with absent fields taken from settings.
pub fn resolve_overrides(cli: OverrideSet, settings: &Settings) -> OverrideSet {
    cli.or(&settings.overrides)
}

/// Export file path from `--output`, `--output-dir`, settings, or Downloads.
pub fn resolve_destination(
    output: Option<&Path>,
    output_dir: Option<&Path>,
    settings: &Settings,
) -> PathBuf {
    if let Some(path) = output {
        return path.to_path_buf();
    }
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| settings.export.output_dir.clone())
        .unwrap_or_else(downloads_dir);
    default_export_path(&dir)
}
