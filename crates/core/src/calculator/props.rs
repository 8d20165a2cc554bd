//! Property-based tests for the arithmetic engine.
//!
//! - Round-half-up idempotency and bounds
//! - Division identity
//! - Allocation never exceeds the allocated amount

use proptest::prelude::*;

use super::engine::Calculator;

/// Strategy to generate amounts well away from the `i64` boundaries.
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate rounding precisions (0 to 8).
fn precision() -> impl Strategy<Value = u32> {
    0u32..=8
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rounding twice gives the same result as rounding once.
    #[test]
    fn prop_round_is_idempotent(a in amount(), p in precision()) {
        let once = Calculator::round(a, p).unwrap();
        let twice = Calculator::round(once, p).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Rounding preserves the sign and moves by less than one step.
    #[test]
    fn prop_round_stays_within_one_step(a in amount(), p in 2u32..=8) {
        let rounded = Calculator::round(a, p).unwrap();
        let step = 10i64.pow(p - 1);

        prop_assert_eq!(rounded % step, 0);
        prop_assert!((rounded - a).abs() <= step / 2);
        prop_assert!(rounded == 0 || rounded.signum() == a.signum());
    }

    /// Rounding is symmetric around zero.
    #[test]
    fn prop_round_is_symmetric(a in amount(), p in precision()) {
        prop_assert_eq!(
            Calculator::round(-a, p).unwrap(),
            -Calculator::round(a, p).unwrap()
        );
    }

    /// `d * (a / d) + a % d == a` for any non-zero divisor.
    #[test]
    fn prop_division_identity(a in amount(), d in -1000i64..1000) {
        prop_assume!(d != 0);
        let q = Calculator::divide(a, d).unwrap();
        let r = Calculator::modulus(a, d).unwrap();
        prop_assert_eq!(q * d + r, a);
        prop_assert!(r == 0 || r.signum() == a.signum());
    }

    /// A share never exceeds the whole and carries the sign of the amount.
    #[test]
    fn prop_allocate_share_bounded(
        a in amount(),
        ratio in 0i64..10_000,
        extra in 0i64..10_000,
    ) {
        let total = ratio + extra;
        let share = Calculator::allocate(a, ratio, total).unwrap();
        prop_assert!(share.abs() <= a.abs());
        prop_assert!(share == 0 || share.signum() == a.signum());
    }
}
