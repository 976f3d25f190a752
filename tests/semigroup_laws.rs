//! Property-based tests for `Semigroup::combine` and container `concat`.
//!
//! - **Associativity**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
//! - **Replacement**: an absent or failed container is replaced by the
//!   concatenated argument, and an absent argument replaces a present one

use std::collections::BTreeMap;

use algebrars::container::{Optional, Outcome};
use algebrars::dynamic::Value;
use algebrars::typeclass::{Last, Semigroup};
use proptest::prelude::*;

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_associativity(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    #[test]
    fn prop_string_associativity(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_vec_associativity(
        a in prop::collection::vec(any::<u8>(), 0..6),
        b in prop::collection::vec(any::<u8>(), 0..6),
        c in prop::collection::vec(any::<u8>(), 0..6),
    ) {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_boolean_associativity(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    #[test]
    fn prop_map_merge_associativity(
        a in prop::collection::btree_map(0_u8..8, any::<u8>(), 0..4),
        b in prop::collection::btree_map(0_u8..8, any::<u8>(), 0..4),
        c in prop::collection::btree_map(0_u8..8, any::<u8>(), 0..4),
    ) {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_present_optionals_combine_held_values(a in ".{0,8}", b in ".{0,8}") {
        let expected = format!("{a}{b}");
        prop_assert_eq!(Optional::some(a).concat(b), Optional::some(expected));
    }

    #[test]
    fn prop_last_keeps_rightmost(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(Last(a).combine(Last(b)), Last(b));
    }
}

// =============================================================================
// concat on containers
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_optional_is_replaced(value in any::<Option<i32>>()) {
        let absent: Optional<i32> = Optional::none();
        prop_assert_eq!(absent.concat(value), Optional::from(value));
    }

    #[test]
    fn prop_failed_outcome_is_replaced(value in any::<i32>()) {
        let failed: Outcome<i32, String> = Outcome::failure(String::from("lost"));
        prop_assert_eq!(failed.concat(value), Outcome::success(value));
    }
}

#[test]
fn concat_merges_maps_with_argument_winning() {
    let held = Optional::some(BTreeMap::from([("foo", "bar"), ("bar", "")]));
    let merged = held.concat(BTreeMap::from([("bar", "baz")]));
    assert_eq!(
        merged,
        Optional::some(BTreeMap::from([("foo", "bar"), ("bar", "baz")]))
    );
}

#[test]
fn concat_dispatches_on_dynamic_kinds() {
    let cases = [
        (Value::from(42), Value::from(1), Value::from(43)),
        (Value::from("foo"), Value::from("bar"), Value::from("foobar")),
        (Value::from(true), Value::from(false), Value::from(false)),
        (Value::array([1, 2, 3]), Value::array([4, 5]), Value::array([1, 2, 3, 4, 5])),
        (Value::from(5), Value::from("five"), Value::from("five")),
    ];
    for (held, argument, expected) in cases {
        assert_eq!(Optional::of(held).concat(argument), Optional::some(expected));
    }
}

#[test]
fn concat_with_absent_dynamic_value_is_absent() {
    let held = Optional::of(Value::from(1));
    assert!(held.concat(Value::Null).is_absent());
}
