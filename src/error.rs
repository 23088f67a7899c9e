//! Error types for growvec

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrowError {
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Insert position {position} is past the end (length {len})")]
    InsertOutOfBounds { position: usize, len: usize },

    #[error("Operation requires a non-empty container")]
    Empty,

    #[error("Failed to allocate storage for {requested} elements")]
    AllocationFailed { requested: usize },

    #[error("Invalid growth policy: {0}")]
    InvalidPolicy(String),

    #[error("Target not found")]
    NotFound,

    #[error("Invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GrowError>;
