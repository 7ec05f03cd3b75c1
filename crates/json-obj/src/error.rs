//! Error type for document operations.

use json_obj_path::PathError;
use thiserror::Error;

/// Result alias for document operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`Document`](crate::Document) operations and the
/// assignment engine.
#[derive(Debug, Error)]
pub enum Error {
    /// `set` was given an absent value.
    #[error("invalid in value")]
    InvalidIn,

    /// The destination cannot hold the shape of the source value.
    #[error("invalid out type")]
    InvalidOut,

    /// The path is malformed, or its target has the wrong shape for the
    /// operation.
    #[error("invalid path")]
    InvalidPath,

    /// The path is well formed but addresses nothing in the document.
    #[error("element not found")]
    NotFound,

    /// An array index is past the end of the array.
    #[error("index out of range")]
    OutOfRange,

    /// Narrowing a number into the destination would lose magnitude or
    /// fractional digits.
    #[error("json value truncated or overflowed in output")]
    Truncate,

    /// Reserved for in/out incompatibilities not covered above. Never
    /// returned by this crate.
    #[error("in out type mismatch")]
    TypeMismatch,

    /// Parsing or encoding JSON failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidPath => Error::InvalidPath,
            PathError::NotFound => Error::NotFound,
            PathError::OutOfRange => Error::OutOfRange,
        }
    }
}
