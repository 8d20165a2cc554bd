//! Integer arithmetic primitives on raw amounts.
//!
//! CRITICAL: amounts never touch floating point. Every operation that can
//! overflow `i64` is checked and reports `MoneyError::ArithmeticOverflow`
//! instead of wrapping.

use crate::error::{MoneyError, MoneyResult};

/// A quantity of a currency's smallest unit (e.g., cents for USD).
pub type Amount = i64;

/// Arithmetic engine for raw amounts.
///
/// Knows nothing about currencies. Every function is pure and deterministic.
pub struct Calculator;

impl Calculator {
    /// Returns `a + b`.
    pub fn add(a: Amount, b: Amount) -> MoneyResult<Amount> {
        a.checked_add(b).ok_or(MoneyError::ArithmeticOverflow("add"))
    }

    /// Returns `a - b`.
    pub fn subtract(a: Amount, b: Amount) -> MoneyResult<Amount> {
        a.checked_sub(b)
            .ok_or(MoneyError::ArithmeticOverflow("subtract"))
    }

    /// Returns `a * m`.
    pub fn multiply(a: Amount, m: i64) -> MoneyResult<Amount> {
        a.checked_mul(m)
            .ok_or(MoneyError::ArithmeticOverflow("multiply"))
    }

    /// Integer division truncating toward zero.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::calculator::Calculator;
    ///
    /// assert_eq!(Calculator::divide(-7, 2).unwrap(), -3);
    /// assert!(Calculator::divide(7, 0).is_err());
    /// ```
    pub fn divide(a: Amount, d: i64) -> MoneyResult<Amount> {
        if d == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        a.checked_div(d)
            .ok_or(MoneyError::ArithmeticOverflow("divide"))
    }

    /// Remainder of `a / d`, with the sign of the dividend.
    pub fn modulus(a: Amount, d: i64) -> MoneyResult<Amount> {
        if d == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        a.checked_rem(d)
            .ok_or(MoneyError::ArithmeticOverflow("modulus"))
    }

    /// Absolute value. Fails only for `i64::MIN`.
    pub fn absolute(a: Amount) -> MoneyResult<Amount> {
        a.checked_abs()
            .ok_or(MoneyError::ArithmeticOverflow("absolute"))
    }

    /// Plain sign flip: `negate(negate(a)) == a`.
    pub fn negate(a: Amount) -> MoneyResult<Amount> {
        a.checked_neg()
            .ok_or(MoneyError::ArithmeticOverflow("negate"))
    }

    /// Rounds half-up on the absolute value, then restores the sign.
    ///
    /// `precision` counts the trailing digits of the smallest unit that take
    /// part in rounding: the lowest `precision - 1` digits are cleared, and a
    /// cleared part of at least half a step rounds away from zero. Precisions
    /// `0` and `1` leave the amount unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::calculator::Calculator;
    ///
    /// // $12.35 -> $12.40, $12.34 -> $12.30
    /// assert_eq!(Calculator::round(1235, 2).unwrap(), 1240);
    /// assert_eq!(Calculator::round(1234, 2).unwrap(), 1230);
    /// assert_eq!(Calculator::round(1234, 0).unwrap(), 1234);
    /// ```
    pub fn round(a: Amount, precision: u32) -> MoneyResult<Amount> {
        if a == 0 || precision <= 1 {
            return Ok(a);
        }

        // Steps beyond i128 are far above any i64 magnitude.
        let Some(factor) = 10_i128.checked_pow(precision - 1) else {
            return Ok(0);
        };

        let abs = i128::from(a).abs();
        let remainder = abs % factor;
        let mut rounded = abs - remainder;
        if remainder >= factor / 2 {
            rounded += factor;
        }

        let signed = if a < 0 { -rounded } else { rounded };
        Amount::try_from(signed).map_err(|_| MoneyError::ArithmeticOverflow("round"))
    }

    /// Proportional share: `a * ratio / total`, truncated toward zero.
    ///
    /// The product is computed in 128 bits so it cannot overflow. Returns `0`
    /// when `a` or `total` is zero.
    pub fn allocate(a: Amount, ratio: i64, total: i64) -> MoneyResult<Amount> {
        if a == 0 || total == 0 {
            return Ok(0);
        }

        let share = i128::from(a) * i128::from(ratio) / i128::from(total);
        Amount::try_from(share).map_err(|_| MoneyError::ArithmeticOverflow("allocate"))
    }
}
