//! Error types for colour model lookups and conversions.

use thiserror::Error;

/// Colour model error.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Name does not match any known colour model.
    #[error("unknown colour model: {0}")]
    UnknownModel(String),

    /// Name does not match any known illuminant.
    #[error("unknown illuminant: {0}")]
    UnknownIlluminant(String),
}

/// Result type for colour model operations.
pub type ModelResult<T> = Result<T, ModelError>;
