//! Error types produced by the mapper.

mod path;
mod types;

pub use types::{Argument, ConvertError, MapError};

/// Result alias used across the crate.
pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests;
