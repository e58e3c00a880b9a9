//! Engine error types.

use thiserror::Error;

use mortgage_core::MortgageError;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No rate is offered for the requested maturity period
    #[error("No interest rate found for maturity period: {maturity_period}")]
    RateNotFound {
        /// The requested maturity period, in years.
        maturity_period: u32,
    },

    /// Calculation error
    #[error("calculation error: {0}")]
    CalculationError(String),
}

impl From<MortgageError> for EngineError {
    fn from(e: MortgageError) -> Self {
        EngineError::CalculationError(e.to_string())
    }
}
