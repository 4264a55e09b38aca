//! Property-based tests for nebula-validator.

use nebula_validator::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn min_length_idempotent(s in ".*") {
        let v = min_length(3);
        let r1 = v.validate(&*s);
        let r2 = v.validate(&*s);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn in_range_idempotent(n in any::<i64>()) {
        let v = in_range(0i64, 100i64);
        let r1 = v.validate(&n);
        let r2 = v.validate(&n);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let combined = a.and(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        let combined_ok = combined.validate(&*s).is_ok();

        prop_assert_eq!(combined_ok, a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,20}") {
        let a = min_length(5);
        let b = max_length(3);
        let combined = a.or(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        let combined_ok = combined.validate(&*s).is_ok();

        prop_assert_eq!(combined_ok, a_ok || b_ok);
    }

    #[test]
    fn double_negation_agrees(s in ".{0,20}") {
        let v = min_length(5);
        let double_neg = not(not(min_length(5)));

        prop_assert_eq!(v.validate(&*s).is_ok(), double_neg.validate(&*s).is_ok());
    }
}
