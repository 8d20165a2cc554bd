//! Money error types.

use moneta_shared::AppError;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by monetary arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Binary operation between values of different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: String,
        /// Currency of the offending operand.
        got: String,
    },

    /// Divide or modulus with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Split into a non-positive number of parts.
    #[error("Invalid partition count: {0} (must be higher than zero)")]
    InvalidPartitionCount(i64),

    /// Allocate without any ratio.
    #[error("No ratios specified")]
    NoRatiosSpecified,

    /// Allocate with a negative ratio.
    #[error("Negative ratio not allowed: {0}")]
    NegativeRatioNotAllowed(i64),

    /// Sum of allocation ratios exceeds `i64::MAX`.
    #[error("Sum of ratios exceeds max int")]
    RatioSumOverflow,

    /// Checked integer arithmetic overflowed.
    #[error("Arithmetic overflow in {0}")]
    ArithmeticOverflow(&'static str),
}

impl MoneyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidPartitionCount(_) => "INVALID_PARTITION_COUNT",
            Self::NoRatiosSpecified => "NO_RATIOS_SPECIFIED",
            Self::NegativeRatioNotAllowed(_) => "NEGATIVE_RATIO_NOT_ALLOWED",
            Self::RatioSumOverflow => "RATIO_SUM_OVERFLOW",
            Self::ArithmeticOverflow(_) => "ARITHMETIC_OVERFLOW",
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        Self::Money(err.to_string())
    }
}
