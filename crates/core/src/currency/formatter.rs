//! Display formatting of amounts.
//!
//! Formatting is pure string templating over the absolute digits of the
//! amount. No floating point is involved, so every `i64` renders exactly.

use rust_decimal::Decimal;

use crate::calculator::Amount;
use crate::error::{MoneyError, MoneyResult};

/// Formats amounts according to currency-specific rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    /// Number of decimal places.
    pub fraction: u32,
    /// Decimal separator.
    pub decimal: String,
    /// Thousands separator. Empty disables grouping.
    pub thousand: String,
    /// Currency symbol.
    pub grapheme: String,
    /// Format template (`"$1"`, `"1 $"`, ...).
    pub template: String,
}

impl Formatter {
    /// Creates a formatter with the given rules.
    #[must_use]
    pub fn new(fraction: u32, decimal: &str, thousand: &str, grapheme: &str, template: &str) -> Self {
        Self {
            fraction,
            decimal: decimal.to_string(),
            thousand: thousand.to_string(),
            grapheme: grapheme.to_string(),
            template: template.to_string(),
        }
    }

    /// Formats an amount given in the smallest unit.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::currency::Formatter;
    ///
    /// let formatter = Formatter::new(2, ".", ",", "$", "$1");
    /// assert_eq!(formatter.format(123456), "$1,234.56");
    /// assert_eq!(formatter.format(-500), "-$5.00");
    /// ```
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        #[allow(clippy::cast_possible_truncation)]
        let fraction = self.fraction as usize;
        let mut digits = amount.unsigned_abs().to_string();

        if digits.len() <= fraction {
            digits = format!("{}{digits}", "0".repeat(fraction + 1 - digits.len()));
        }

        let (integer, decimals) = digits.split_at(digits.len() - fraction);
        let mut number = group_thousands(integer, &self.thousand);
        if fraction > 0 {
            number.push_str(&self.decimal);
            number.push_str(decimals);
        }

        let rendered = self
            .template
            .replacen('1', &number, 1)
            .replacen('$', &self.grapheme, 1);

        if amount < 0 {
            format!("-{rendered}")
        } else {
            rendered
        }
    }

    /// Converts an amount to an exact decimal in major units.
    ///
    /// ```
    /// use moneta_core::currency::Formatter;
    /// use rust_decimal_macros::dec;
    ///
    /// let formatter = Formatter::new(2, ".", ",", "$", "$1");
    /// assert_eq!(formatter.to_major_units(123456).unwrap(), dec!(1234.56));
    /// ```
    pub fn to_major_units(&self, amount: Amount) -> MoneyResult<Decimal> {
        Decimal::try_new(amount, self.fraction)
            .map_err(|_| MoneyError::ArithmeticOverflow("to_major_units"))
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn usd() -> Formatter {
        Formatter::new(2, ".", ",", "$", "$1")
    }

    #[rstest]
    #[case(123_456, "$1,234.56")]
    #[case(-500, "-$5.00")]
    #[case(5, "$0.05")]
    #[case(0, "$0.00")]
    #[case(100_000, "$1,000.00")]
    #[case(99_999, "$999.99")]
    #[case(123_456_789, "$1,234,567.89")]
    fn test_format_usd(#[case] amount: i64, #[case] expected: &str) {
        assert_eq!(usd().format(amount), expected);
    }

    #[test]
    fn test_format_suffix_template() {
        let formatter = Formatter::new(2, ",", ".", "€", "1 $");
        assert_eq!(formatter.format(123_456), "1.234,56 €");
        assert_eq!(formatter.format(-1), "-0,01 €");
    }

    #[test]
    fn test_format_no_fraction() {
        let yen = Formatter::new(0, ".", ",", "¥", "$1");
        assert_eq!(yen.format(12_345), "¥12,345");
        assert_eq!(yen.format(0), "¥0");
        assert_eq!(yen.format(7), "¥7");
    }

    #[test]
    fn test_format_three_digit_fraction() {
        let dinar = Formatter::new(3, ".", ",", "BD", "1 $");
        assert_eq!(dinar.format(1_234_567), "1,234.567 BD");
        assert_eq!(dinar.format(5), "0.005 BD");
    }

    #[test]
    fn test_format_fraction_wider_than_amount() {
        let formatter = Formatter::new(20, ".", ",", "X", "1$");
        assert_eq!(formatter.format(1), "0.00000000000000000001X");
        assert_eq!(formatter.format(-12), "-0.00000000000000000012X");
    }

    #[test]
    fn test_format_without_thousand_separator() {
        let formatter = Formatter::new(2, ".", "", "$", "$1");
        assert_eq!(formatter.format(123_456_789), "$1234567.89");
    }

    #[test]
    fn test_format_extremes() {
        assert_eq!(usd().format(i64::MIN), "-$92,233,720,368,547,758.08");
        assert_eq!(usd().format(i64::MAX), "$92,233,720,368,547,758.07");
    }

    #[test]
    fn test_to_major_units() {
        assert_eq!(usd().to_major_units(123_456).unwrap(), dec!(1234.56));
        assert_eq!(usd().to_major_units(-500).unwrap(), dec!(-5.00));
        let yen = Formatter::new(0, ".", ",", "¥", "$1");
        assert_eq!(yen.to_major_units(1000).unwrap(), dec!(1000));
    }

    #[test]
    fn test_to_major_units_rejects_excessive_scale() {
        let formatter = Formatter::new(40, ".", ",", "X", "1$");
        assert_eq!(
            formatter.to_major_units(1),
            Err(MoneyError::ArithmeticOverflow("to_major_units"))
        );
    }
}
