//! Error types for Contar operations.
//!
//! The vectorization pipeline is total over arbitrary strings, so the failure
//! surface is small: errors only arise from invalid configuration.

use std::fmt;

/// Main error type for Contar operations.
///
/// # Examples
///
/// ```
/// use contar::error::ContarError;
///
/// let err = ContarError::InvalidHyperparameter {
///     param: "delimiters".to_string(),
///     value: "{}".to_string(),
///     constraint: "at least one delimiter character".to_string(),
/// };
/// assert!(err.to_string().contains("delimiters"));
/// ```
#[derive(Debug)]
pub enum ContarError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ContarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter {param}={value}: must satisfy {constraint}"
                )
            }
            ContarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ContarError {}

/// Convenience result type for Contar operations.
pub type Result<T> = std::result::Result<T, ContarError>;
