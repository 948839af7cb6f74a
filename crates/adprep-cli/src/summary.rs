use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adprep_cli::pipeline::ExportReport;
use adprep_model::ReconciliationResult;

use crate::types::CommandOutcome;

pub fn print_summary(outcome: &CommandOutcome) {
    println!(
        "Valid rows: {} of {}",
        outcome.valid_rows, outcome.total_rows
    );
    if outcome.valid_rows == 0 {
        println!("No valid rows found (need non-blank values in the first three columns).");
        return;
    }
    if let Some(result) = &outcome.rename {
        print_rename_summary(result);
    }
    if let Some(report) = &outcome.export {
        print_export_summary(report);
    }
}

/// Machine-readable summary on a single stdout line.
pub fn print_json_summary(outcome: &CommandOutcome) -> Result<()> {
    println!("{}", serde_json::to_string(outcome)?);
    Ok(())
}

fn print_rename_summary(result: &ReconciliationResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Renamed"),
        count_cell(result.renamed_count() - result.already_named_count(), Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Already named"),
        count_cell(result.already_named_count(), Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Failed"),
        count_cell(result.failures().len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(result.skipped().len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched files"),
        count_cell(result.unmatched_files().len(), Color::Yellow),
    ]);
    println!();
    println!("Rename:");
    println!("{table}");

    print_failure_table(result);
    print_unmatched_table(result);

    println!(
        "{} video files were successfully renamed.",
        result.renamed_count()
    );
    println!(
        "{} video files couldn't be renamed.",
        result.failures().len()
    );
    println!(
        "There were {} files in your folder that don't have a match in your spreadsheet.",
        result.unmatched_files().len()
    );
}

fn print_failure_table(result: &ReconciliationResult) {
    if result.failures().is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Description"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in result.failures() {
        table.add_row(vec![
            Cell::new(failure.line),
            Cell::new(&failure.description),
            Cell::new(failure.reason.to_string()).fg(Color::Red),
        ]);
    }
    println!();
    println!("Failures:");
    println!("{table}");
}

fn print_unmatched_table(result: &ReconciliationResult) {
    if result.unmatched_files().is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Unmatched file")]);
    apply_table_style(&mut table);
    for stem in result.unmatched_files() {
        table.add_row(vec![dim_cell(stem)]);
    }
    println!();
    println!("{table}");
}

fn print_export_summary(report: &ExportReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Exported"),
        count_cell(report.records, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("No asset file"),
        count_cell(report.missing.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(report.skipped.len(), Color::Yellow),
    ]);
    println!();
    println!("Export:");
    println!("{table}");

    if !report.missing.is_empty() {
        let mut missing = Table::new();
        missing.set_header(vec![header_cell("Line"), header_cell("Expected file stem")]);
        apply_table_style(&mut missing);
        align_column(&mut missing, 0, CellAlignment::Right);
        for asset in &report.missing {
            missing.add_row(vec![Cell::new(asset.line), Cell::new(asset.key.as_str())]);
        }
        println!("{missing}");
    }

    println!(
        "Your metadata import CSV has been saved to {}.",
        report.path.display()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
