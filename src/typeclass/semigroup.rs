//! Semigroup type class - the `concat` combining operation.
//!
//! `Semigroup::combine` is the statically dispatched form of the containers'
//! `concat`. Each implementation is one row of the dispatch table:
//!
//! | type | `combine` |
//! |---|---|
//! | integer primitives (including `i128`/`u128` big integers) | wrapping addition |
//! | `f32`, `f64` | addition |
//! | `String` | concatenation |
//! | `bool` | logical AND |
//! | `Vec<T>` | `self`'s elements followed by `other`'s |
//! | `HashMap`, `BTreeMap` | shallow merge, `other`'s keys win |
//! | [`Last<T>`] | replacement by `other` |
//! | records | field by field, via `#[derive(Semigroup)]` |
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebrars::typeclass::Semigroup;
//!
//! assert_eq!(42.combine(1), 43);
//! assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
//! assert_eq!(vec![1, 2, 3].combine(vec![4, 5]), vec![1, 2, 3, 4, 5]);
//! assert!(!true.combine(false));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Types with an associative binary combination.
pub trait Semigroup {
    /// Combines `self` with `other`.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Folds every element of `iterator` with [`combine`](Semigroup::combine).
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(words), Some(String::from("abc")));
    /// assert_eq!(i32::combine_all(Vec::new()), None);
    /// ```
    fn combine_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

macro_rules! wrapping_semigroup {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Semigroup for $integer {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
    };
}

macro_rules! additive_semigroup {
    ($($float:ty),* $(,)?) => {
        $(
            impl Semigroup for $float {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

wrapping_semigroup!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
additive_semigroup!(f32, f64);

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for bool {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self && other
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<K, V, S> Semigroup for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<K: Ord, V> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// `None` is the neutral element; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// Replacement semigroup: the right-hand value always wins.
///
/// This is the "anything else" row of the concat table, for types with no
/// natural combination of their own.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Last, Semigroup};
///
/// assert_eq!(Last('a').combine(Last('b')), Last('b'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Last<T>(pub T);

impl<T> Last<T> {
    /// Unwraps the held value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Semigroup for Last<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(42, 1, 43)]
    #[case(-5, 5, 0)]
    fn integers_add(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    #[case(i32::MAX, 1, i32::MIN)]
    #[case(i32::MIN, -1, i32::MAX)]
    fn i32_overflow_wraps(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    #[case(u8::MAX, 1, 0)]
    #[case(u8::MAX, u8::MAX, 254)]
    fn u8_overflow_wraps(#[case] left: u8, #[case] right: u8, #[case] expected: u8) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn i128_overflow_wraps() {
        assert_eq!(i128::MAX.combine(1), i128::MIN);
    }

    #[rstest]
    fn big_integers_add_beyond_i64() {
        let big = i128::from(i64::MAX);
        assert_eq!(big.combine(1), i128::from(i64::MAX) + 1);
    }

    #[rstest]
    fn floats_add() {
        assert!((1.5_f64.combine(2.25) - 3.75).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    fn booleans_and(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn strings_concatenate() {
        assert_eq!(
            String::from("foo").combine(String::from("bar")),
            String::from("foobar")
        );
    }

    #[rstest]
    fn vectors_append_in_order() {
        assert_eq!(vec![1, 2, 3].combine(vec![4, 5]), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn maps_merge_with_right_bias() {
        let left = BTreeMap::from([("foo", "bar"), ("bar", "")]);
        let right = BTreeMap::from([("bar", "baz")]);
        assert_eq!(
            left.combine(right),
            BTreeMap::from([("foo", "bar"), ("bar", "baz")])
        );
    }

    #[rstest]
    fn hash_maps_merge_with_right_bias() {
        let left: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2)]);
        let right: HashMap<&str, i32> = HashMap::from([("b", 3)]);
        let merged = left.combine(right);
        assert_eq!(merged.get("a"), Some(&1));
        assert_eq!(merged.get("b"), Some(&3));
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(3))]
    #[case(Some(1), None, Some(1))]
    #[case(None, Some(2), Some(2))]
    #[case(None, None, None)]
    fn options_skip_none(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn last_replaces() {
        assert_eq!(Last(1).combine(Last(2)).into_inner(), 2);
    }

    #[rstest]
    fn combine_all_is_left_fold() {
        assert_eq!(Vec::combine_all(vec![vec![1], vec![2, 3]]), Some(vec![1, 2, 3]));
    }
}
