//! Error types for the parity harness

use std::path::PathBuf;

use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or reading datasets
///
/// A record that disagrees with the local evaluator is not an error; it is
/// reported through [`crate::compare::Verdict`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The dataset to compare does not exist
    #[error("File {} not found.", .0.display())]
    DatasetNotFound(PathBuf),

    /// CSV layer failure while reading or writing a dataset
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Missing datasets end a run cleanly instead of failing it
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DatasetNotFound(_))
    }
}
