//! Error types for mortgage arithmetic and domain values.

use thiserror::Error;

/// A specialized Result type for core mortgage operations.
pub type MortgageResult<T> = Result<T, MortgageError>;

/// The main error type for core mortgage operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MortgageError {
    /// Decimal arithmetic left the representable range.
    #[error("Arithmetic error: {reason}")]
    Arithmetic {
        /// Description of the failed operation.
        reason: String,
    },

    /// An input outside the documented domain of an operation.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },
}

impl MortgageError {
    /// Creates an arithmetic error.
    #[must_use]
    pub fn arithmetic(reason: impl Into<String>) -> Self {
        Self::Arithmetic {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
