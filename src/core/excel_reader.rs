use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};

use crate::error::PipelineError;
use crate::models::{CellValue, DataTable};

pub struct ExcelReader {
    workbook: Xlsx<std::io::BufReader<std::fs::File>>,
    path: PathBuf,
}

impl std::fmt::Debug for ExcelReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExcelReader")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ExcelReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref().to_path_buf();

        let workbook: Xlsx<_> = open_workbook(&path).map_err(|err| match err {
            XlsxError::Io(source) => PipelineError::FileAccess {
                path: path.clone(),
                source,
            },
            other => PipelineError::Format {
                path: path.clone(),
                message: other.to_string(),
            },
        })?;

        Ok(Self { workbook, path })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Load the default worksheet into a table, header row first.
    pub fn read_first_sheet(&mut self) -> Result<DataTable, PipelineError> {
        let sheet_name = self.sheet_names().first().cloned().ok_or_else(|| {
            PipelineError::Format {
                path: self.path.clone(),
                message: "workbook has no worksheets".to_string(),
            }
        })?;

        self.read_sheet(&sheet_name)
    }

    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<DataTable, PipelineError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|err| PipelineError::Format {
                path: self.path.clone(),
                message: format!("cannot read worksheet '{sheet_name}': {err}"),
            })?;

        let mut rows = range.rows();

        let columns: Vec<String> = rows
            .next()
            .ok_or_else(|| PipelineError::Format {
                path: self.path.clone(),
                message: format!("worksheet '{sheet_name}' has no header row"),
            })?
            .iter()
            .map(|cell| Self::data_to_cell(cell).to_string())
            .collect();

        let records = rows
            .map(|row| row.iter().map(Self::data_to_cell).collect())
            .collect();

        Ok(DataTable::new(&self.path, columns, records))
    }

    fn data_to_cell(data: &Data) -> CellValue {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Float(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(parsed) => CellValue::DateTime(parsed),
                None => CellValue::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(format!("{e:?}")),
        }
    }
}
