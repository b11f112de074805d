use crate::error::PipelineError;
use crate::models::DataTable;

pub const TASK_COLUMN: &str = "Aspect of Practice/ Restricted Activity/ Task";
pub const CLINICAL_COLUMN: &str = "Clinical/Clinical Support";

/// Print the distinct values of the two categorical columns and the full
/// column list, one line each, to stdout.
pub fn print_overview(table: &DataTable) -> Result<(), PipelineError> {
    let tasks = table.distinct_values(TASK_COLUMN)?;
    let clinical = table.distinct_values(CLINICAL_COLUMN)?;

    println!("Unique task {tasks:?}");
    println!("Unique {clinical:?}");
    println!("Columns {:?}", table.column_names());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    #[test]
    fn test_missing_categorical_column() {
        let table = DataTable::new(
            "partial.xlsx",
            vec![TASK_COLUMN.to_string(), "Date".to_string()],
            vec![vec![
                CellValue::Text("Triage".to_string()),
                CellValue::Text("2023-04-01".to_string()),
            ]],
        );

        let err = print_overview(&table).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingColumn { ref column, .. } if column == CLINICAL_COLUMN
        ));
    }
}
