use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while loading a scan file.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan file could not be opened or read.
    #[error("unable to read scan file '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV framing itself is broken (bad quoting, invalid UTF-8, ...).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected at least two fields, column {column} is missing")]
    MissingField { line: u64, column: usize },

    /// Non-numeric or non-finite field, or a negative distance.
    #[error("line {line}: column {column} is not a valid value: '{value}'")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },

    /// The file holds a header but no data rows, so no radial bound exists.
    #[error("scan file contains no data rows")]
    EmptyData,
}
