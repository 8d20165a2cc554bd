//! Currency registry.
//!
//! The registry is an explicit value: callers own it, extend it with custom
//! currencies, and pass it by reference to whatever needs to resolve codes.
//! The built-in ISO table is also exposed as a read-only shared instance.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use moneta_shared::{AppConfig, CurrencyConfig};

use super::iso::ISO_4217;
use super::types::Currency;
use crate::calculator::Amount;
use crate::money::Money;

static ISO_REGISTRY: LazyLock<CurrencyRegistry> = LazyLock::new(CurrencyRegistry::iso);

/// Lookup table from currency code to metadata.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, Arc<Currency>>,
}

impl CurrencyRegistry {
    /// Creates a registry with no currencies.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding every active ISO 4217 currency.
    #[must_use]
    pub fn iso() -> Self {
        let mut registry = Self::empty();
        for &(code, numeric, fraction, grapheme, template, decimal, thousand) in ISO_4217 {
            let mut currency = Currency::new(code, fraction, grapheme, template, decimal, thousand);
            if !numeric.is_empty() {
                currency = currency.with_numeric_code(numeric);
            }
            registry.register(currency);
        }
        registry
    }

    /// Returns the process-wide read-only ISO registry.
    #[must_use]
    pub fn shared_iso() -> &'static Self {
        &ISO_REGISTRY
    }

    /// Creates an ISO registry extended with the configured custom currencies.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let mut registry = Self::iso();
        for custom in &config.currencies {
            registry.register_custom(custom);
        }
        registry
    }

    /// Adds or replaces a currency, keyed by its code.
    pub fn register(&mut self, currency: Currency) -> Arc<Currency> {
        let currency = Arc::new(currency);
        self.currencies
            .insert(currency.code.clone(), Arc::clone(&currency));
        currency
    }

    /// Adds or replaces a currency built from configuration.
    pub fn register_custom(&mut self, config: &CurrencyConfig) -> Arc<Currency> {
        self.register(Currency::from(config))
    }

    /// Looks up a currency by code, case-insensitively.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Arc<Currency>> {
        self.currencies.get(&code.to_uppercase()).cloned()
    }

    /// Looks up a currency by ISO 4217 numeric code.
    ///
    /// Numeric codes are not unique across historical entries; the match with
    /// the lowest alphabetic code wins.
    #[must_use]
    pub fn by_numeric_code(&self, numeric_code: &str) -> Option<Arc<Currency>> {
        self.currencies
            .values()
            .filter(|c| c.numeric_code.as_deref() == Some(numeric_code))
            .min_by(|a, b| a.code.cmp(&b.code))
            .cloned()
    }

    /// Resolves a code to a currency, case-insensitively.
    ///
    /// Unknown codes resolve to [`Currency::fallback`].
    #[must_use]
    pub fn resolve(&self, code: &str) -> Arc<Currency> {
        self.get(code)
            .unwrap_or_else(|| Arc::new(Currency::fallback(code)))
    }

    /// Creates money by resolving `code` in this registry.
    #[must_use]
    pub fn money(&self, amount: Amount, code: &str) -> Money {
        Money::new(amount, self.resolve(code))
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(&code.to_uppercase())
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Registered codes in alphabetical order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.currencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
