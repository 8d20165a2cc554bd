//! Codec error types.

use std::num::ParseIntError;

use moneta_shared::AppError;
use thiserror::Error;

/// Result type alias using `CodecError`.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while encoding or decoding money.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not valid JSON for a money record.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A required field is missing or empty.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Database string is not an `amount<separator>code` pair.
    #[error("{value:?} is not a valid money value; expected \"amount{separator}currency_code\"")]
    InvalidFormat {
        /// Offending input.
        value: String,
        /// Separator in use.
        separator: String,
    },

    /// Amount part is not an integer.
    #[error("Invalid amount {value:?}: {source}")]
    InvalidAmount {
        /// Offending amount text.
        value: String,
        /// Parse failure.
        source: ParseIntError,
    },

    /// Currency code is not registered.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl CodecError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
        }
    }
}

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err.to_string())
    }
}
