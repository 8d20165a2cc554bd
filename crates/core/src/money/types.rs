//! Money value type with currency-safe arithmetic.
//!
//! CRITICAL: amounts are integers in the currency's smallest unit. Every
//! binary operation checks that both sides share a currency before it
//! computes anything.

use std::cmp::Ordering;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::calculator::{Amount, Calculator};
use crate::codec::MoneyRecord;
use crate::currency::{Currency, CurrencyRegistry};
use crate::error::{MoneyError, MoneyResult};

/// A monetary amount paired with its currency.
///
/// Immutable: every operation returns a new value.
///
/// # Example
///
/// ```
/// use moneta_core::Money;
///
/// let price = Money::from_code(2550, "USD");
/// let tax = Money::from_code(255, "USD");
///
/// let total = price.add(&[&tax]).unwrap();
/// assert_eq!(total.amount(), 2805);
/// assert_eq!(total.to_string(), "$28.05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Amount,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates money from an amount in the smallest unit.
    #[must_use]
    pub fn new(amount: Amount, currency: impl Into<Arc<Currency>>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Arc<Currency>>) -> Self {
        Self::new(0, currency)
    }

    /// Creates money by resolving `code` against the built-in ISO registry.
    ///
    /// Unknown codes get fallback metadata; use a [`CurrencyRegistry`] to
    /// work with custom currencies.
    #[must_use]
    pub fn from_code(amount: Amount, code: &str) -> Self {
        CurrencyRegistry::shared_iso().money(amount, code)
    }

    /// Creates money from a decimal in major units.
    ///
    /// Digits beyond the currency's fraction are truncated toward zero.
    ///
    /// ```
    /// use moneta_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let usd = Money::from_code(0, "USD").currency_ref().clone();
    /// let money = Money::from_major_units(dec!(25.509), usd).unwrap();
    /// assert_eq!(money.amount(), 2550);
    /// ```
    pub fn from_major_units(value: Decimal, currency: impl Into<Arc<Currency>>) -> MoneyResult<Self> {
        let currency = currency.into();
        let overflow = MoneyError::ArithmeticOverflow("from_major_units");

        let scale = 10_i64
            .checked_pow(currency.fraction)
            .ok_or_else(|| overflow.clone())?;
        let amount = value
            .round_dp_with_strategy(currency.fraction, RoundingStrategy::ToZero)
            .checked_mul(Decimal::from(scale))
            .and_then(|units| units.to_i64())
            .ok_or(overflow)?;

        Ok(Self { amount, currency })
    }

    /// Returns the amount in the smallest unit.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the shared handle to the currency.
    #[must_use]
    pub const fn currency_ref(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Returns true if both values share a currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    fn assert_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code.clone(),
                got: other.currency.code.clone(),
            })
        }
    }

    pub(crate) fn with_amount(&self, amount: Amount) -> Self {
        Self {
            amount,
            currency: Arc::clone(&self.currency),
        }
    }

    /// Compares the amounts of two values of the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.assert_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns true if the amounts are equal.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Returns true if this amount is greater.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if this amount is greater or equal.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Returns true if this amount is less.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Returns true if this amount is less or equal.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns the absolute value.
    pub fn absolute(&self) -> MoneyResult<Self> {
        Ok(self.with_amount(Calculator::absolute(self.amount)?))
    }

    /// Returns the value with its sign flipped.
    pub fn negate(&self) -> MoneyResult<Self> {
        Ok(self.with_amount(Calculator::negate(self.amount)?))
    }

    /// Adds every operand to this value.
    ///
    /// All operands must share this value's currency; otherwise nothing is
    /// computed and `CurrencyMismatch` is returned. With no operands the
    /// result equals `self`.
    pub fn add(&self, others: &[&Self]) -> MoneyResult<Self> {
        for other in others {
            self.assert_same_currency(other)?;
        }

        let amount = others
            .iter()
            .try_fold(self.amount, |acc, other| Calculator::add(acc, other.amount))?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts every operand from this value.
    ///
    /// Same currency rules as [`Money::add`].
    pub fn subtract(&self, others: &[&Self]) -> MoneyResult<Self> {
        for other in others {
            self.assert_same_currency(other)?;
        }

        let amount = others
            .iter()
            .try_fold(self.amount, |acc, other| Calculator::subtract(acc, other.amount))?;
        Ok(self.with_amount(amount))
    }

    /// Multiplies the amount by each multiplier in turn.
    ///
    /// # Panics
    ///
    /// Panics if `multipliers` is empty: calling without a multiplier is a
    /// caller bug, not a data condition.
    pub fn multiply(&self, multipliers: &[i64]) -> MoneyResult<Self> {
        assert!(
            !multipliers.is_empty(),
            "at least one multiplier is required to multiply"
        );

        let amount = multipliers
            .iter()
            .try_fold(self.amount, |acc, &m| Calculator::multiply(acc, m))?;
        Ok(self.with_amount(amount))
    }

    /// Rounds half-up using the currency's fraction as the precision.
    ///
    /// The step is `10^(fraction - 1)` smallest units, so a two-digit currency
    /// such as USD rounds to the nearest 10 cents, not to the nearest dollar.
    /// Currencies with zero or one fraction digit are left unchanged. See
    /// [`Calculator::round`].
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// assert_eq!(Money::from_code(1567, "USD").round().unwrap().amount(), 1570);
    /// assert_eq!(Money::from_code(1567, "JPY").round().unwrap().amount(), 1567);
    /// ```
    pub fn round(&self) -> MoneyResult<Self> {
        Ok(self.with_amount(Calculator::round(
            self.amount,
            self.currency.fraction,
        )?))
    }

    /// Returns the amount as an exact decimal in major units.
    pub fn to_major_units(&self) -> MoneyResult<Decimal> {
        self.currency.formatter().to_major_units(self.amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.currency.formatter().format(self.amount))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MoneyRecord::from(self).serialize(serializer)
    }
}
