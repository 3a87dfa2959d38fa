//! Error types for the selection engine and its file helpers

use submat_core::{ParseError, SelectError, ShapeError};

/// Errors returned by `submat` operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Selection was rejected; carries the violated constraint
    #[error(transparent)]
    Select(#[from] SelectError),
    /// A matrix could not be built from the given parts
    #[error("invalid matrix: {0}")]
    Shape(#[from] ShapeError),
    /// A range or index list string could not be parsed
    #[error("invalid selection string: {0}")]
    Parse(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The selection error, if this is one
    pub fn as_select(&self) -> Option<&SelectError> {
        match self {
            Error::Select(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for `submat` operations
pub type Result<T> = std::result::Result<T, Error>;
