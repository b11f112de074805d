use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort the pipeline. None of them are recovered internally.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// File missing, unreadable, or unwritable.
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but is not parseable as the expected structure.
    #[error("unexpected format in {path}: {message}")]
    Format { path: PathBuf, message: String },

    /// Expected column label absent from a loaded dataset.
    #[error("column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

impl PipelineError {
    pub fn missing_column(column: impl Into<String>, path: &Path) -> Self {
        Self::MissingColumn {
            column: column.into(),
            path: path.to_path_buf(),
        }
    }

    /// Split a csv crate error into the access/format taxonomy.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::FileAccess {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::Format {
                path: path.to_path_buf(),
                message,
            },
        }
    }
}
