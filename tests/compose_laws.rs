#![cfg(feature = "compose")]
//! Property-based tests for composition and currying.
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe/compose consistency**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Flip**: `flip(flip(f)) == f`
//! - **Curry equivalence**: every batch split of a curried call equals the
//!   direct call

use algebrars::compose::{compose_all, curry3, flip, identity};
use algebrars::typeclass::Callable;
use algebrars::{compose, pipe};
use proptest::prelude::*;

fn add_one(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn square(n: i32) -> i32 {
    n.wrapping_mul(n)
}

// =============================================================================
// Composition
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let left = compose!(add_one, compose!(double, square));
        let right = compose!(compose!(add_one, double), square);
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_compose_identity(x in any::<i32>()) {
        prop_assert_eq!(compose!(identity, double)(x), double(x));
        prop_assert_eq!(compose!(double, identity)(x), double(x));
    }

    #[test]
    fn prop_empty_compose_is_identity(x in any::<i32>()) {
        prop_assert_eq!(compose!()(x), x);
    }

    #[test]
    fn prop_pipe_is_reversed_compose(x in any::<i32>()) {
        prop_assert_eq!(pipe!(x, square, double, add_one), compose!(add_one, double, square)(x));
    }

    #[test]
    fn prop_compose_all_matches_macro(x in any::<i32>()) {
        let steps: Vec<fn(i32) -> i32> = vec![add_one, double, square];
        prop_assert_eq!(compose_all(steps)(x), compose!(add_one, double, square)(x));
    }

    #[test]
    fn prop_double_flip_is_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }
}

// =============================================================================
// Currying
// =============================================================================

proptest! {
    #[test]
    fn prop_curry_splits_agree(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let direct = a.wrapping_mul(b).wrapping_add(c);
        let curried = curry3(|a: i32, b: i32, c: i32| a.wrapping_mul(b).wrapping_add(c));

        prop_assert_eq!(curried.call((a, b, c)), direct);
        prop_assert_eq!(curried.call((a,)).call((b,)).call((c,)), direct);
        prop_assert_eq!(curried.call((a, b)).call((c,)), direct);
        prop_assert_eq!(curried.call((a,)).call((b, c)), direct);
    }
}

#[test]
fn described_pipeline_reads_right_to_left() {
    let shout = |text: String| text.to_uppercase();
    let label = |n: i32| format!("value: {n}");
    assert_eq!(compose!(shout, label, add_one)(5), "VALUE: 6");
}
