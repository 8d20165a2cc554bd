//! JSON encoding of money values.
//!
//! Wire shape: `{"amount":1000,"currency":"USD"}`.
//!
//! The encode/decode behaviour is a [`JsonStrategy`] owned by a [`JsonCodec`],
//! so callers can swap it without touching any shared state.

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyRegistry;
use crate::money::Money;

use super::error::{CodecError, CodecResult};

/// Serde wire shape of a money value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Amount in the smallest unit. Missing amounts decode as zero.
    #[serde(default)]
    pub amount: i64,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
}

impl From<&Money> for MoneyRecord {
    fn from(money: &Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency().code.clone(),
        }
    }
}

/// Pluggable JSON behaviour for [`JsonCodec`].
pub trait JsonStrategy: Send + Sync {
    /// Encodes a money value as JSON.
    fn encode(&self, money: &Money) -> CodecResult<String>;

    /// Decodes a money value, resolving its currency against `registry`.
    fn decode(&self, registry: &CurrencyRegistry, input: &str) -> CodecResult<Money>;
}

/// Default strategy.
///
/// Unknown currency codes decode with fallback metadata. A missing or empty
/// currency is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultJsonStrategy;

impl JsonStrategy for DefaultJsonStrategy {
    fn encode(&self, money: &Money) -> CodecResult<String> {
        Ok(serde_json::to_string(&MoneyRecord::from(money))?)
    }

    fn decode(&self, registry: &CurrencyRegistry, input: &str) -> CodecResult<Money> {
        let record: MoneyRecord = serde_json::from_str(input)?;
        let code = record.currency.trim();
        if code.is_empty() {
            return Err(CodecError::MissingField("currency"));
        }
        Ok(Money::new(record.amount, registry.resolve(code)))
    }
}

/// JSON codec bound to a currency registry.
///
/// # Example
///
/// ```
/// use moneta_core::codec::JsonCodec;
/// use moneta_core::{CurrencyRegistry, Money};
///
/// let codec = JsonCodec::new(CurrencyRegistry::iso());
/// let json = codec.encode(&Money::from_code(1000, "USD")).unwrap();
/// assert_eq!(json, r#"{"amount":1000,"currency":"USD"}"#);
///
/// let money = codec.decode(&json).unwrap();
/// assert_eq!(money.to_string(), "$10.00");
/// ```
pub struct JsonCodec {
    registry: CurrencyRegistry,
    strategy: Box<dyn JsonStrategy>,
}

impl JsonCodec {
    /// Creates a codec using [`DefaultJsonStrategy`].
    #[must_use]
    pub fn new(registry: CurrencyRegistry) -> Self {
        Self::with_strategy(registry, DefaultJsonStrategy)
    }

    /// Creates a codec using a custom strategy.
    #[must_use]
    pub fn with_strategy(registry: CurrencyRegistry, strategy: impl JsonStrategy + 'static) -> Self {
        Self {
            registry,
            strategy: Box::new(strategy),
        }
    }

    /// Returns the registry used for decoding.
    #[must_use]
    pub const fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// Encodes a money value.
    pub fn encode(&self, money: &Money) -> CodecResult<String> {
        self.strategy.encode(money)
    }

    /// Decodes a money value.
    pub fn decode(&self, input: &str) -> CodecResult<Money> {
        self.strategy.decode(&self.registry, input)
    }
}

impl std::fmt::Debug for JsonCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonCodec")
            .field("currencies", &self.registry.len())
            .finish_non_exhaustive()
    }
}
