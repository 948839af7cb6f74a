//! Integration tests for spreadsheet loading and row filtering.

use std::io::Write;

use adprep_ingest::{CellValue, IngestError, Table, filter_rows, read_table};
use proptest::prelude::*;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_csv_to_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "plan.csv",
        "Description,AD ID,Placement(s),Ad Name,Year\n\
         Spring Sale,1001,Web,Spring Sale (Spanish),2024.0\n\
         ,1002,Web,Missing description,\n\
         Summer,1003,TV,Summer (Animation),\n",
    );

    let table = read_table(&path).unwrap();
    let rows = filter_rows(&table).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].match_key().unwrap().as_str(), "Spring Sale-1001");
    assert_eq!(rows[0].value("Year"), "2024.0");
    assert_eq!(rows[1].line(), 4);
    assert_eq!(rows[1].value("Year"), "");
}

#[test]
fn test_two_column_csv_is_a_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "narrow.csv", "Description,AD ID\nclipA,1\n");

    let table = read_table(&path).unwrap();
    let err = filter_rows(&table).unwrap_err();
    assert!(err.is_schema_error());
}

#[test]
fn test_absent_named_columns_resolve_blank() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "plan.csv", "Description,AD ID,Other\nclipA,1,x\n");

    let rows = filter_rows(&read_table(&path).unwrap()).unwrap();
    assert_eq!(rows[0].value("Spot Running"), "");
    assert_eq!(rows[0].value("TRT"), "");
}

#[test]
fn test_xlsx_to_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in [" Description", "AD ID ", "Placement(s)", "Spot Running", "Year"]
        .into_iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, header).unwrap();
    }
    let date_format = Format::new().set_num_format("mm/dd/yyyy");
    let spot = ExcelDateTime::from_ymd(2025, 4, 1).unwrap();

    sheet.write_string(1, 0, "Spring Sale").unwrap();
    sheet.write_number(1, 1, 1001).unwrap();
    sheet.write_string(1, 2, "Web").unwrap();
    sheet.write_datetime_with_format(1, 3, &spot, &date_format).unwrap();
    sheet.write_number(1, 4, 2024.0).unwrap();

    sheet.write_number(2, 1, 1002).unwrap();
    sheet.write_string(2, 2, "Web").unwrap();

    sheet.write_string(3, 0, "Summer").unwrap();
    sheet.write_number(3, 1, 1003).unwrap();
    sheet.write_string(3, 2, "TV").unwrap();
    workbook.save(&path).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.headers()[..2], ["Description", "AD ID"]);
    assert_eq!(table.height(), 3);

    let rows = filter_rows(&table).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].match_key().unwrap().as_str(), "Spring Sale-1001");
    assert_eq!(rows[0].value("Spot Running"), "04/01/2025");
    assert_eq!(rows[0].value("Year"), "2024");
    assert_eq!(rows[1].line(), 4);
    assert_eq!(rows[1].match_key().unwrap().as_str(), "Summer-1003");
    assert_eq!(rows[1].value("Spot Running"), "");
    assert_eq!(rows[1].value("Year"), "");
}

#[test]
fn test_missing_spreadsheet() {
    let dir = TempDir::new().unwrap();
    let result = read_table(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        Just("nan".to_string()),
        "[a-z0-9]{1,6}",
    ]
}

proptest! {
    #[test]
    fn test_filtered_rows_are_an_ordered_valid_subsequence(
        rows in prop::collection::vec(prop::collection::vec(cell_strategy(), 4), 0..20)
    ) {
        let headers = vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];
        let cells: Vec<Vec<CellValue>> = rows
            .iter()
            .map(|row| row.iter().map(|v| CellValue::text(v)).collect())
            .collect();
        let table = Table::new(headers, cells);

        let valid = filter_rows(&table).unwrap();

        let expected = rows
            .iter()
            .filter(|row| {
                row[..3]
                    .iter()
                    .all(|v| !v.trim().is_empty() && !v.trim().eq_ignore_ascii_case("nan"))
            })
            .count();
        prop_assert_eq!(valid.len(), expected);
        for pair in valid.windows(2) {
            prop_assert!(pair[0].line() < pair[1].line());
        }
        for row in &valid {
            for column in ["A", "B", "C"] {
                prop_assert!(!row.value(column).is_empty());
            }
        }
    }
}
