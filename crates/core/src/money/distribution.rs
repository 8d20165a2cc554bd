//! Equal split and ratio allocation.
//!
//! Both algorithms guarantee the parts sum EXACTLY to the original amount:
//! 1. Compute each part with truncating integer division
//! 2. Compute the leftover (original - sum of parts)
//! 3. Hand the leftover out one smallest unit at a time, round-robin from
//!    the first part

use crate::calculator::{Amount, Calculator};
use crate::error::{MoneyError, MoneyResult};

use super::types::Money;

impl Money {
    /// Splits this value into `n` parts as evenly as integer arithmetic allows.
    ///
    /// Extra units go to the earliest parts, so no two parts differ by more
    /// than one smallest unit.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let bill = Money::from_code(1000, "USD");
    /// let shares: Vec<i64> = bill.split(3).unwrap().iter().map(Money::amount).collect();
    /// assert_eq!(shares, vec![334, 333, 333]);
    /// ```
    pub fn split(&self, n: i64) -> MoneyResult<Vec<Self>> {
        if n <= 0 {
            return Err(MoneyError::InvalidPartitionCount(n));
        }

        let base = Calculator::divide(self.amount(), n)?;
        let leftover = Calculator::absolute(Calculator::modulus(self.amount(), n)?)?;
        let step: Amount = if self.amount() >= 0 { 1 } else { -1 };

        // leftover < n, so it always fits in usize once n does.
        let count = usize::try_from(n).map_err(|_| MoneyError::InvalidPartitionCount(n))?;
        let extra = usize::try_from(leftover).unwrap_or(count);

        (0..count)
            .map(|i| {
                let amount = if i < extra {
                    Calculator::add(base, step)?
                } else {
                    base
                };
                Ok(self.with_amount(amount))
            })
            .collect()
    }

    /// Allocates this value proportionally to non-negative integer ratios.
    ///
    /// If every ratio is zero, every part is zero and no leftover is handed
    /// out.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let amount = Money::from_code(100, "USD");
    /// let parts: Vec<i64> = amount
    ///     .allocate(&[33, 33, 33])
    ///     .unwrap()
    ///     .iter()
    ///     .map(Money::amount)
    ///     .collect();
    /// assert_eq!(parts, vec![34, 33, 33]);
    /// ```
    pub fn allocate(&self, ratios: &[i64]) -> MoneyResult<Vec<Self>> {
        if ratios.is_empty() {
            return Err(MoneyError::NoRatiosSpecified);
        }

        let mut sum: i64 = 0;
        for &ratio in ratios {
            if ratio < 0 {
                return Err(MoneyError::NegativeRatioNotAllowed(ratio));
            }
            sum = sum
                .checked_add(ratio)
                .ok_or(MoneyError::RatioSumOverflow)?;
        }

        let mut parts = ratios
            .iter()
            .map(|&ratio| Calculator::allocate(self.amount(), ratio, sum))
            .collect::<MoneyResult<Vec<Amount>>>()?;

        if sum == 0 {
            return Ok(parts.into_iter().map(|a| self.with_amount(a)).collect());
        }

        let allocated = parts
            .iter()
            .try_fold(0, |acc: Amount, &part| Calculator::add(acc, part))?;
        let mut leftover = Calculator::subtract(self.amount(), allocated)?;
        let step: Amount = if leftover > 0 { 1 } else { -1 };

        // Round-robin: the cursor wraps so the loop ends for any leftover.
        let mut cursor = 0;
        while leftover != 0 {
            parts[cursor] = Calculator::add(parts[cursor], step)?;
            leftover -= step;
            cursor = (cursor + 1) % parts.len();
        }

        Ok(parts.into_iter().map(|a| self.with_amount(a)).collect())
    }
}
