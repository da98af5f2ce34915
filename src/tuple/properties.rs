// ============================================================================
// Property Tests
// Component-wise laws checked over random tuples
// ============================================================================

use super::FixedTuple;
use proptest::prelude::*;

type V4 = FixedTuple<i32, 4>;

// Small magnitudes keep native i32 arithmetic clear of overflow.
fn small_tuple() -> impl Strategy<Value = V4> {
    prop::array::uniform4(-10_000i32..10_000).prop_map(FixedTuple::new)
}

fn nonzero_tuple() -> impl Strategy<Value = V4> {
    prop::array::uniform4(prop_oneof![-10_000i32..-1, 1i32..10_000]).prop_map(FixedTuple::new)
}

proptest! {
    #[test]
    fn prop_construction_round_trip(values in prop::array::uniform4(any::<i32>())) {
        let t = FixedTuple::new(values);
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(t[i], *value);
        }
    }

    #[test]
    fn prop_componentwise_arithmetic(a in small_tuple(), b in nonzero_tuple()) {
        let (sum, diff, prod, quot) = (a + b, a - b, a * b, a / b);
        for i in 0..4 {
            prop_assert_eq!(sum[i], a[i] + b[i]);
            prop_assert_eq!(diff[i], a[i] - b[i]);
            prop_assert_eq!(prod[i], a[i] * b[i]);
            prop_assert_eq!(quot[i], a[i] / b[i]);
        }
    }

    #[test]
    fn prop_all_components_relation(a in small_tuple(), b in small_tuple()) {
        let expected = (0..4).all(|i| a[i] < b[i]);
        prop_assert_eq!(a.all_lt(&b), expected);
        prop_assert_eq!(b.all_gt(&a), expected);
    }

    #[test]
    fn prop_mixed_pair_is_incomparable(a in small_tuple(), lower in 0usize..4, higher in 0usize..4) {
        prop_assume!(lower != higher);
        let mut b = a;
        b[lower] -= 1;
        b[higher] += 1;
        prop_assert!(!a.all_lt(&b));
        prop_assert!(!a.all_gt(&b));
    }

    #[test]
    fn prop_equality_negation(a in small_tuple(), b in small_tuple()) {
        prop_assert_eq!(a != b, !(a == b));
    }

    #[test]
    fn prop_compound_assignment_equivalence(a in small_tuple(), b in small_tuple()) {
        let mut c = a;
        c += b;
        prop_assert_eq!(c, a + b);
    }

    #[test]
    fn prop_step_duality(a in small_tuple()) {
        let mut t = a;
        t.increment().decrement();
        prop_assert_eq!(t, a);
    }

    #[test]
    fn prop_reset_uniformity(a in small_tuple(), v in any::<i32>()) {
        let mut t = a;
        t.reset_to(v);
        prop_assert!(t.eq_scalar(v));
    }

    #[test]
    fn prop_checked_agrees_with_native_in_range(a in small_tuple(), b in small_tuple()) {
        prop_assert_eq!(a.checked_add(&b), Ok(a + b));
        prop_assert_eq!(a.checked_sub(&b), Ok(a - b));
        prop_assert_eq!(a.checked_mul(&b), Ok(a * b));
    }

    #[test]
    fn prop_checked_div_agrees_with_native(a in small_tuple(), b in nonzero_tuple()) {
        prop_assert_eq!(a.checked_div(&b), Ok(a / b));
    }
}
