use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::PipelineError;

/// A single spreadsheet cell, keeping the source type so values render
/// to text the same way on every export.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => {
                // Whole-number floats render without the trailing ".0"
                if v.fract() == 0.0 && v.is_finite() {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// In-memory table loaded from the spreadsheet: ordered column names plus
/// one row of cells per record. Read-only after construction.
#[derive(Debug, Clone)]
pub struct DataTable {
    source: PathBuf,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Build a table, padding or truncating every row to the header width.
    pub fn new(source: impl Into<PathBuf>, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Self {
            source: source.into(),
            columns,
            rows,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column_name)
    }

    /// Distinct rendered values of a column, first-seen order, deduplicated.
    pub fn distinct_values(&self, column_name: &str) -> Result<Vec<String>, PipelineError> {
        let col_index = self
            .column_index(column_name)
            .ok_or_else(|| PipelineError::missing_column(column_name, &self.source))?;

        let mut seen = HashSet::new();
        let mut values = Vec::new();

        for row in &self.rows {
            let rendered = row[col_index].to_string();
            if seen.insert(rendered.clone()) {
                values.push(rendered);
            }
        }

        Ok(values)
    }
}
