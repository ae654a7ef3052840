//! Error types for the magic-mime classifier.
//!
//! Classification itself never fails: its three-valued outcome is the
//! contract. These errors cover the surfaces around it (reading files,
//! loading configuration, validating rule sets) and convert cleanly for the
//! Python bindings.

use thiserror::Error;

/// Main error type for magic-mime operations.
#[derive(Debug, Error)]
pub enum MagicError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A rule violates a structural invariant of the rule set
    #[error("Invalid rule at {path}: {message}")]
    InvalidRule { path: String, message: String },

    /// A regex rule whose pattern does not compile
    #[error("Invalid regex pattern {pattern:?}: {message}")]
    InvalidRegex { pattern: String, message: String },

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MagicError {
    fn from(err: serde_json::Error) -> Self {
        MagicError::Serialization(err.to_string())
    }
}

/// Result type alias for magic-mime operations
pub type Result<T> = std::result::Result<T, MagicError>;

/// Convert magic-mime errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<MagicError> for pyo3::PyErr {
    fn from(err: MagicError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            MagicError::Io(e) => PyIOError::new_err(e.to_string()),
            MagicError::InvalidConfig(msg) | MagicError::Serialization(msg) => {
                PyValueError::new_err(msg)
            }
            _ => PyException::new_err(err.to_string()),
        }
    }
}
