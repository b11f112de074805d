use std::path::Path;

use anyhow::Result;

use care_activity_checker::core::{
    load_occupation_names, print_overview, report_unmatched, write_csv, ExcelReader,
};

const SPREADSHEET_PATH: &str = "Care Activity Data.xlsx";
const OCCUPATION_PATH: &str = "occupation.csv";
const OUTPUT_PATH: &str = "cleaned.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let table = ExcelReader::open(SPREADSHEET_PATH)?.read_first_sheet()?;
    tracing::info!(
        rows = table.row_count(),
        columns = table.column_names().len(),
        "loaded {}",
        SPREADSHEET_PATH
    );

    let occupations = load_occupation_names(Path::new(OCCUPATION_PATH))?;

    print_overview(&table)?;
    report_unmatched(&occupations, table.column_names());

    write_csv(&table, Path::new(OUTPUT_PATH))?;

    Ok(())
}
