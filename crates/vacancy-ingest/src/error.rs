//! Error types for vacancy CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting vacancy counts.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV parser rejected the input (invalid UTF-8, broken quoting).
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Schema Errors ===
    /// Referenced column is absent from the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A record is too short to hold a referenced column.
    #[error("line {line} of {path} has no value for column '{column}'")]
    MissingField {
        column: String,
        line: u64,
        path: PathBuf,
    },
}

impl IngestError {
    /// Maps an I/O error on `path`, singling out a missing file.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// Maps a `csv` error on `path`, keeping I/O failures apart from parse failures.
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::from_io(path, io),
            _ => Self::CsvParse {
                path: path.to_path_buf(),
                message,
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
