use std::path::Path;

use crate::error::PipelineError;

/// Load the occupation names from a delimited reference file, in file order.
///
/// The file must carry a header row with a column labelled `Name`.
pub fn load_occupation_names(path: &Path) -> Result<Vec<String>, PipelineError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|err| PipelineError::from_csv(path, err))?;

    let headers = reader
        .headers()
        .map_err(|err| PipelineError::from_csv(path, err))?;

    let name_index = headers
        .iter()
        .position(|h| h == "Name")
        .ok_or_else(|| PipelineError::missing_column("Name", path))?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| PipelineError::from_csv(path, err))?;
        names.push(record.get(name_index).unwrap_or_default().to_string());
    }

    tracing::debug!(count = names.len(), "loaded reference names from {}", path.display());
    Ok(names)
}
