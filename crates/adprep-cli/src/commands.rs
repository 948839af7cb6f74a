use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use adprep_cli::pipeline::{
    LoadedRows, export_assets, load_rows, rename_assets, resolve_destination, resolve_overrides,
};
use adprep_cli::progress::{ProgressMode, ProgressReporter};
use adprep_cli::settings::Settings;
use adprep_model::{EXPORT_COLUMNS, ReconciliationResult};

use crate::cli::{ExportArgs, RenameArgs, SourceArgs};
use crate::summary::apply_table_style;
use crate::types::CommandOutcome;

/// State shared by every command of one invocation.
pub struct Session {
    pub settings: Settings,
    pub progress: ProgressMode,
}

pub fn run_columns() {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column"]);
    apply_table_style(&mut table);
    for (idx, column) in EXPORT_COLUMNS.iter().enumerate() {
        table.add_row(vec![(idx + 1).to_string(), (*column).to_string()]);
    }
    println!("{table}");
}

pub fn run_rename(args: &RenameArgs, session: &Session) -> Result<CommandOutcome> {
    let loaded = load_rows(&args.source.spreadsheet)?;
    let mut outcome = CommandOutcome::new(loaded.rows.len(), loaded.total_rows);
    if loaded.is_empty() {
        return Ok(outcome);
    }
    outcome.rename = Some(rename(&loaded, &args.source, session)?);
    Ok(outcome)
}

pub fn run_export(args: &ExportArgs, session: &Session) -> Result<CommandOutcome> {
    let loaded = load_rows(&args.source.spreadsheet)?;
    let mut outcome = CommandOutcome::new(loaded.rows.len(), loaded.total_rows);
    if loaded.is_empty() {
        return Ok(outcome);
    }
    export(&loaded, args, session, &mut outcome)?;
    Ok(outcome)
}

/// Renames, then exports from the same filtered rows.
pub fn run_all(args: &ExportArgs, session: &Session) -> Result<CommandOutcome> {
    let loaded = load_rows(&args.source.spreadsheet)?;
    let mut outcome = CommandOutcome::new(loaded.rows.len(), loaded.total_rows);
    if loaded.is_empty() {
        return Ok(outcome);
    }
    outcome.rename = Some(rename(&loaded, &args.source, session)?);
    export(&loaded, args, session, &mut outcome)?;
    Ok(outcome)
}

fn rename(
    loaded: &LoadedRows,
    source: &SourceArgs,
    session: &Session,
) -> Result<ReconciliationResult> {
    let span = info_span!("rename", folder = %source.folder.display());
    let _guard = span.enter();

    let mut reporter = ProgressReporter::new(session.progress, "Renaming");
    let result = rename_assets(&loaded.rows, &source.folder, |p| reporter.report(p));
    reporter.finish();
    result
}

fn export(
    loaded: &LoadedRows,
    args: &ExportArgs,
    session: &Session,
    outcome: &mut CommandOutcome,
) -> Result<()> {
    let span = info_span!("export", folder = %args.source.folder.display());
    let _guard = span.enter();

    let overrides = resolve_overrides(args.overrides.to_override_set(), &session.settings);
    let destination = resolve_destination(
        args.output.as_deref(),
        args.output_dir.as_deref(),
        &session.settings,
    );
    info!(path = %destination.display(), "exporting metadata");

    let mut reporter = ProgressReporter::new(session.progress, "Exporting");
    let report = export_assets(
        &loaded.rows,
        &args.source.folder,
        &overrides,
        &destination,
        |p| reporter.report(p),
    );
    reporter.finish();
    outcome.export = Some(report?);
    Ok(())
}
