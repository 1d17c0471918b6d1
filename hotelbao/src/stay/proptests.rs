//! Property-based tests for the half-open overlap rule.

use super::StayPeriod;
use chrono::{DateTime, Utc};
use proptest::prelude::*;

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

/// Generates a valid stay somewhere in 2025 lasting one hour to sixty days.
fn stay_strategy() -> impl Strategy<Value = StayPeriod> {
    (1_735_689_600i64..1_767_225_600, 3_600i64..5_184_000)
        .prop_map(|(start, len)| StayPeriod::new(at(start), at(start + len)).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Overlap matches the closed-form predicate s2 < e && e2 > s.
    #[test]
    fn overlap_matches_predicate(a in stay_strategy(), b in stay_strategy()) {
        let expected = b.check_in() < a.check_out() && b.check_out() > a.check_in();
        prop_assert_eq!(a.overlaps(&b), expected);
    }

    // Overlap is symmetric.
    #[test]
    fn overlap_is_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // A stay starting exactly at another's check-out never conflicts, either way round.
    #[test]
    fn back_to_back_never_conflicts(a in stay_strategy(), len in 3_600i64..5_184_000) {
        let next = StayPeriod::new(a.check_out(), at(a.check_out().timestamp() + len)).unwrap();
        prop_assert!(!a.overlaps(&next));
        prop_assert!(!next.overlaps(&a));
    }

    // Every stay overlaps itself.
    #[test]
    fn overlap_is_reflexive(a in stay_strategy()) {
        prop_assert!(a.overlaps(&a));
    }
}
