//! Error types for Trazar operations.
//!
//! Contract violations (malformed batches, unknown command codes) are
//! reported through [`TrazarError`]; validation findings never are — a
//! sequence failing the grammar is a normal verdict, not an error.

use std::fmt;

/// Main error type for Trazar operations.
///
/// Raised for caller contract violations only: mismatched batch
/// dimensions, wrong parameter width, command codes outside the closed
/// vocabulary, or a zero-length sequence axis.
///
/// # Examples
///
/// ```
/// use trazar::error::TrazarError;
///
/// let err = TrazarError::DimensionMismatch {
///     expected: "1x5 commands".to_string(),
///     actual: "2x5 params".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum TrazarError {
    /// Batch axes don't match between commands and parameters, or a
    /// buffer length doesn't match its declared shape.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A command code outside the closed vocabulary was encountered.
    UnknownCommandCode {
        /// The offending wire code
        code: i32,
    },

    /// The sequence axis is empty (S = 0); nothing can be validated.
    EmptySequenceAxis,

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for TrazarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrazarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Batch dimension mismatch: expected {expected}, got {actual}"
                )
            }
            TrazarError::UnknownCommandCode { code } => {
                write!(
                    f,
                    "Unknown command code {code}: expected -1 (pad) or 0..=5"
                )
            }
            TrazarError::EmptySequenceAxis => {
                write!(f, "Empty sequence axis: S must be at least 1")
            }
            TrazarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TrazarError {}

impl From<&str> for TrazarError {
    fn from(msg: &str) -> Self {
        TrazarError::Other(msg.to_string())
    }
}

impl From<String> for TrazarError {
    fn from(msg: String) -> Self {
        TrazarError::Other(msg)
    }
}

impl TrazarError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, TrazarError>;
