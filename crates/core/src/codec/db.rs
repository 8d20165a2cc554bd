//! Database string encoding: `"{amount}{separator}{code}"`, e.g. `"2550|USD"`.

use std::sync::Arc;

use moneta_shared::CodecConfig;

use crate::currency::{Currency, CurrencyRegistry};
use crate::money::Money;

use super::error::{CodecError, CodecResult};

/// Encodes money and currencies for single-column storage.
#[derive(Debug, Clone)]
pub struct DbCodec {
    separator: String,
}

impl Default for DbCodec {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}

impl DbCodec {
    /// Creates a codec using the configured separator.
    #[must_use]
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            separator: config.db_separator.clone(),
        }
    }

    /// Returns the separator between amount and code.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Encodes a money value.
    ///
    /// ```
    /// use moneta_core::Money;
    /// use moneta_core::codec::DbCodec;
    ///
    /// assert_eq!(DbCodec::default().encode_money(&Money::from_code(2550, "USD")), "2550|USD");
    /// ```
    #[must_use]
    pub fn encode_money(&self, money: &Money) -> String {
        format!("{}{}{}", money.amount(), self.separator, money.currency().code)
    }

    /// Decodes a money value; the currency must be registered.
    pub fn decode_money(&self, registry: &CurrencyRegistry, input: &str) -> CodecResult<Money> {
        let parts: Vec<&str> = input.split(self.separator.as_str()).collect();
        let [amount, code] = parts.as_slice() else {
            return Err(self.invalid_format(input));
        };
        if amount.is_empty() || code.is_empty() {
            return Err(self.invalid_format(input));
        }

        let amount = amount
            .parse::<i64>()
            .map_err(|source| CodecError::InvalidAmount {
                value: (*amount).to_string(),
                source,
            })?;

        Ok(Money::new(amount, self.decode_currency(registry, code)?))
    }

    /// Encodes a currency as its code.
    #[must_use]
    pub fn encode_currency(&self, currency: &Currency) -> String {
        currency.code.clone()
    }

    /// Decodes a currency code; the currency must be registered.
    pub fn decode_currency(
        &self,
        registry: &CurrencyRegistry,
        input: &str,
    ) -> CodecResult<Arc<Currency>> {
        registry
            .get(input)
            .ok_or_else(|| CodecError::UnknownCurrency(input.to_string()))
    }

    fn invalid_format(&self, input: &str) -> CodecError {
        CodecError::InvalidFormat {
            value: input.to_string(),
            separator: self.separator.clone(),
        }
    }
}
