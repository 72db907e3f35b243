//! Common error types for the taxonomy browser

use thiserror::Error;

use crate::cascade::CascadeError;

/// Common result type for taxo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across taxo crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset parsed but violates a structural invariant
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// A file named explicitly by the user does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected cascade transition
    #[error("Cascade error: {0}")]
    Cascade(#[from] CascadeError),
}
