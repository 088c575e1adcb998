// src/catalog/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that stops a catalog from being built. All of these are fatal at
/// startup: the window is never opened without a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog data: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed catalog workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("catalog workbook has no sheet named \"{0}\"")]
    MissingSheet(String),

    #[error("catalog has no header row")]
    EmptyHeader,

    #[error("catalog is missing the \"{0}\" column")]
    MissingColumn(String),

    #[error("line {line}: \"{value}\" in column \"{column}\" is not a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("line {line}: \"{value}\" in column \"{column}\" is not a Y/N flag")]
    InvalidFlag {
        line: u64,
        column: String,
        value: String,
    },

    #[error("product \"{0}\" appears more than once")]
    DuplicateName(String),
}
