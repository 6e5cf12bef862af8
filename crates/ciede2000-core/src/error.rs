//! Error types for ciede2000-core

use thiserror::Error;

/// Result type for ciede2000-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ciede2000-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Text is not in `lab(L, a, b)` notation
    #[error("Invalid lab() notation: {0}")]
    ParseLab(String),
}
