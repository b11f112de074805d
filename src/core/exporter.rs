use std::path::Path;

use crate::error::PipelineError;
use crate::models::DataTable;

/// Write the table as comma-separated UTF-8 text: header record first, then
/// one record per row, no row-index column. Overwrites the destination.
pub fn write_csv(table: &DataTable, path: &Path) -> Result<(), PipelineError> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|err| PipelineError::from_csv(path, err))?;

    writer
        .write_record(table.column_names())
        .map_err(|err| PipelineError::from_csv(path, err))?;

    for row in table.rows() {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .map_err(|err| PipelineError::from_csv(path, err))?;
    }

    writer.flush().map_err(|source| PipelineError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        rows = table.row_count(),
        "exported table to {}",
        path.display()
    );
    Ok(())
}
