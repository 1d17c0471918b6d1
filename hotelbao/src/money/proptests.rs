//! Property-based tests for `Money`.

use super::Money;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Rendering always has exactly two fractional digits and parses back.
    #[test]
    fn display_is_two_decimal_and_parses_back(cents in 0i64..1_000_000_000) {
        let m = Money::from_cents(cents);
        let rendered = m.to_string();
        let (_, fraction) = rendered.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert_eq!(rendered.parse::<Money>().unwrap(), m);
    }

    // Summation does not depend on the order of the amounts.
    #[test]
    fn sum_is_order_independent(values in prop::collection::vec(0i64..10_000_000, 0..20)) {
        let forward = Money::checked_sum(values.iter().copied().map(Money::from_cents)).unwrap();
        let backward = Money::checked_sum(values.iter().rev().copied().map(Money::from_cents)).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward.cents(), values.iter().sum::<i64>());
    }
}
