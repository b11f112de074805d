use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use care_activity_checker::core::{write_csv, ExcelReader, CLINICAL_COLUMN, TASK_COLUMN};
use care_activity_checker::error::PipelineError;

fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let headers = [TASK_COLUMN, CLINICAL_COLUMN, "Injection", "Triage"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    let records = [
        ("Immunization", "Clinical", 1.0, 4.0),
        ("Wound Care", "Clinical Support", 2.5, 0.0),
        ("Immunization", "Clinical", 3.0, 7.0),
    ];
    for (i, (task, clinical, injection, triage)) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *task).unwrap();
        sheet.write_string(row, 1, *clinical).unwrap();
        sheet.write_number(row, 2, *injection).unwrap();
        sheet.write_number(row, 3, *triage).unwrap();
    }

    workbook.save(path).unwrap();
}

#[test]
fn test_load_preserves_columns_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx_path = dir.path().join("Care Activity Data.xlsx");
    write_fixture(&xlsx_path);

    let table = ExcelReader::open(&xlsx_path).unwrap().read_first_sheet().unwrap();

    assert_eq!(
        table.column_names(),
        [TASK_COLUMN, CLINICAL_COLUMN, "Injection", "Triage"]
    );
    assert_eq!(table.row_count(), 3);
}

#[test]
fn test_distinct_values_from_loaded_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx_path = dir.path().join("Care Activity Data.xlsx");
    write_fixture(&xlsx_path);

    let table = ExcelReader::open(&xlsx_path).unwrap().read_first_sheet().unwrap();

    assert_eq!(
        table.distinct_values(TASK_COLUMN).unwrap(),
        vec!["Immunization", "Wound Care"]
    );
    assert_eq!(
        table.distinct_values(CLINICAL_COLUMN).unwrap(),
        vec!["Clinical", "Clinical Support"]
    );
}

#[test]
fn test_export_matches_source_table() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx_path = dir.path().join("Care Activity Data.xlsx");
    let csv_path = dir.path().join("cleaned.csv");
    write_fixture(&xlsx_path);

    let table = ExcelReader::open(&xlsx_path).unwrap().read_first_sheet().unwrap();
    write_csv(&table, &csv_path).unwrap();

    let expected = "\
Aspect of Practice/ Restricted Activity/ Task,Clinical/Clinical Support,Injection,Triage
Immunization,Clinical,1,4
Wound Care,Clinical Support,2.5,0
Immunization,Clinical,3,7
";
    assert_eq!(fs::read_to_string(&csv_path).unwrap(), expected);
}

#[test]
fn test_export_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx_path = dir.path().join("Care Activity Data.xlsx");
    let csv_path = dir.path().join("cleaned.csv");
    write_fixture(&xlsx_path);

    let table = ExcelReader::open(&xlsx_path).unwrap().read_first_sheet().unwrap();
    write_csv(&table, &csv_path).unwrap();
    let first = fs::read(&csv_path).unwrap();

    let table = ExcelReader::open(&xlsx_path).unwrap().read_first_sheet().unwrap();
    write_csv(&table, &csv_path).unwrap();
    let second = fs::read(&csv_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_spreadsheet_aborts_before_export() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx_path = dir.path().join("absent.xlsx");
    let csv_path = dir.path().join("cleaned.csv");

    let err = ExcelReader::open(&xlsx_path).unwrap_err();

    assert!(matches!(err, PipelineError::FileAccess { .. }));
    assert!(!csv_path.exists());
}

#[test]
fn test_invalid_workbook_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx_path = dir.path().join("not-a-workbook.xlsx");
    fs::write(&xlsx_path, "plain text, not a zip archive").unwrap();

    let err = ExcelReader::open(&xlsx_path).unwrap_err();

    assert!(matches!(err, PipelineError::Format { .. }));
}
