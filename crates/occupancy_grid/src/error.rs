//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! empty inputs, invalid configuration, broken occupancy bookkeeping, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("there are no polygons to populate the grid, it can't be created")]
    EmptyInput,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("occupancy invariant violated: {0}")]
    Invariant(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
