//! Currency metadata.

use std::hash::{Hash, Hasher};

use moneta_shared::CurrencyConfig;
use serde::Serialize;

use super::formatter::Formatter;

/// Currency information required for formatting and rounding.
///
/// Identity is the code alone: two currencies are equal iff their codes are
/// equal, whatever their formatting metadata.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct Currency {
    /// Uppercase currency code (e.g., "USD").
    pub code: String,
    /// ISO 4217 numeric code (e.g., "840"), if any.
    pub numeric_code: Option<String>,
    /// Number of digits in the smallest unit (2 for USD, 0 for JPY).
    pub fraction: u32,
    /// Currency symbol (e.g., "$").
    pub grapheme: String,
    /// Format template: `1` is replaced by the number, `$` by the symbol.
    pub template: String,
    /// Decimal separator.
    pub decimal: String,
    /// Thousands separator.
    pub thousand: String,
}

impl Currency {
    /// Creates a currency with the given code and formatting rules.
    #[must_use]
    pub fn new(
        code: &str,
        fraction: u32,
        grapheme: impl Into<String>,
        template: impl Into<String>,
        decimal: impl Into<String>,
        thousand: impl Into<String>,
    ) -> Self {
        Self {
            code: code.to_uppercase(),
            numeric_code: None,
            fraction,
            grapheme: grapheme.into(),
            template: template.into(),
            decimal: decimal.into(),
            thousand: thousand.into(),
        }
    }

    /// Sets the ISO 4217 numeric code.
    #[must_use]
    pub fn with_numeric_code(mut self, numeric_code: impl Into<String>) -> Self {
        self.numeric_code = Some(numeric_code.into());
        self
    }

    /// Metadata used for codes missing from a registry.
    ///
    /// The code doubles as the symbol and is printed after the number.
    #[must_use]
    pub fn fallback(code: &str) -> Self {
        let code = code.to_uppercase();
        Self {
            grapheme: code.clone(),
            code,
            numeric_code: None,
            fraction: 2,
            template: "1$".to_string(),
            decimal: ".".to_string(),
            thousand: ",".to_string(),
        }
    }

    /// Returns a formatter configured with this currency's rules.
    #[must_use]
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.fraction,
            &self.decimal,
            &self.thousand,
            &self.grapheme,
            &self.template,
        )
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl From<&CurrencyConfig> for Currency {
    fn from(config: &CurrencyConfig) -> Self {
        let code = config.code.to_uppercase();
        Self {
            grapheme: config.grapheme.clone().unwrap_or_else(|| code.clone()),
            code,
            numeric_code: config.numeric_code.clone(),
            fraction: config.fraction,
            template: config.template.clone(),
            decimal: config.decimal.clone(),
            thousand: config.thousand.clone(),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
