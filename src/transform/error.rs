//! Tech file conversion errors.

use std::path::PathBuf;

use crate::color::ColorError;

/// Errors that abort a conversion run. None of them are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Cannot open input file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Malformed row at line {line}: {source}")]
    MalformedRow {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write row from line {line}: {source}")]
    Write {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to flush output: {0}")]
    Flush(#[source] std::io::Error),

    #[error(transparent)]
    Color(#[from] ColorError),
}
