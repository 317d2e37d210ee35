//! Error types for the finance planner

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FinanceError>;

/// Errors raised by the calculators and loaders
///
/// A payment that never clears a debt is not an error; see
/// [`PayoffProjection::Never`](crate::payoff::PayoffProjection::Never).
#[derive(Error, Debug)]
pub enum FinanceError {
    /// A monetary amount or rate was negative or not a finite number
    #[error("invalid argument: {name} must be a non-negative number, got {value}")]
    InvalidArgument { name: &'static str, value: f64 },

    /// Payoff month count too large to represent
    #[error("payoff horizon of {months} months is out of range")]
    HorizonOutOfRange { months: f64 },

    #[error("unknown payoff strategy '{0}' (expected 'avalanche' or 'snowball')")]
    UnknownStrategy(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reject negative or non-finite amounts
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FinanceError::InvalidArgument { name, value })
    }
}
