//! Property-based tests for money distribution.
//!
//! - Split: sum invariant, fairness bound, earlier parts first
//! - Allocate: sum invariant, zero ratio sum
//! - Currency guard

use proptest::prelude::*;

use super::types::Money;
use crate::error::MoneyError;

/// Strategy to generate amounts in cents (-10,000,000.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate split counts (1 to 100).
fn split_count() -> impl Strategy<Value = i64> {
    1i64..100
}

/// Strategy to generate 1-10 ratios with a positive sum.
fn ratios() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1_000, 1..10)
        .prop_filter("ratio sum must be positive", |rs| rs.iter().sum::<i64>() > 0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and n > 0, the parts of split() sum to the amount.
    #[test]
    fn prop_split_sum_invariant(amount in amount(), n in split_count()) {
        let parts = Money::from_code(amount, "USD").split(n).unwrap();
        let sum: i64 = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, amount);
        prop_assert_eq!(i64::try_from(parts.len()).unwrap(), n);
    }

    /// *For any* split, the largest and smallest part differ by at most one.
    #[test]
    fn prop_split_fairness(amount in amount(), n in split_count()) {
        let parts = Money::from_code(amount, "USD").split(n).unwrap();
        let max = parts.iter().map(Money::amount).max().unwrap();
        let min = parts.iter().map(Money::amount).min().unwrap();
        prop_assert!(max - min <= 1);
    }

    /// *For any* split, earlier parts are never smaller in absolute terms.
    #[test]
    fn prop_split_earlier_parts_first(amount in amount(), n in split_count()) {
        let parts = Money::from_code(amount, "USD").split(n).unwrap();
        for pair in parts.windows(2) {
            prop_assert!(pair[0].amount().abs() >= pair[1].amount().abs());
        }
    }

    /// *For any* amount and ratios with a positive sum, the parts of
    /// allocate() sum to the amount.
    #[test]
    fn prop_allocate_sum_invariant(amount in amount(), ratios in ratios()) {
        let parts = Money::from_code(amount, "USD").allocate(&ratios).unwrap();
        let sum: i64 = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, amount);
        prop_assert_eq!(parts.len(), ratios.len());
        prop_assert!(parts.iter().all(|p| p.currency().code == "USD"));
    }

    /// *For any* amount, all-zero ratios yield all-zero parts.
    #[test]
    fn prop_allocate_zero_ratios(amount in amount(), len in 1usize..10) {
        let parts = Money::from_code(amount, "USD").allocate(&vec![0; len]).unwrap();
        prop_assert!(parts.iter().all(Money::is_zero));
    }

    /// *For any* two values in different currencies, binary operations fail
    /// and leave both operands unchanged.
    #[test]
    fn prop_currency_guard(a in amount(), b in amount()) {
        let usd = Money::from_code(a, "USD");
        let eur = Money::from_code(b, "EUR");

        let is_mismatch = |e: &MoneyError| matches!(e, MoneyError::CurrencyMismatch { .. });
        prop_assert!(usd.add(&[&eur]).is_err_and(|e| is_mismatch(&e)));
        prop_assert!(usd.subtract(&[&eur]).is_err_and(|e| is_mismatch(&e)));
        prop_assert!(usd.compare(&eur).is_err_and(|e| is_mismatch(&e)));
        prop_assert!(usd.equals(&eur).is_err_and(|e| is_mismatch(&e)));
        prop_assert_eq!(usd.amount(), a);
        prop_assert_eq!(eur.amount(), b);
    }
}
