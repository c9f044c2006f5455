//! Array helper error types.

use thiserror::Error;

/// Result type for array helpers.
pub type ArrayResult<T> = Result<T, ArrayError>;

/// Errors raised by the [`crate::array`] helpers.
#[derive(Debug, Error, PartialEq)]
pub enum ArrayError {
    /// Input columns or rows do not share the same length.
    #[error("shape mismatch: expected length {expected}, found {found}")]
    ShapeMismatch {
        /// Expected length
        expected: usize,
        /// Offending length
        found: usize,
    },

    /// The operation needs at least one element.
    #[error("empty input")]
    Empty,
}
