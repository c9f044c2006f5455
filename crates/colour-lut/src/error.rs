//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
#[derive(Debug, Error)]
pub enum LutError {
    /// Table length or shape does not fit the LUT type.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Domain minimum is not strictly below its maximum.
    #[error("invalid LUT domain: {0}")]
    InvalidDomain(String),

    /// Malformed LUT file content.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Unknown file extension or method name.
    #[error("unsupported LUT format: {0}")]
    UnsupportedFormat(String),

    /// The LUT cannot be stored or converted as requested.
    #[error("unsupported LUT: {0}")]
    UnsupportedLut(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LutError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
