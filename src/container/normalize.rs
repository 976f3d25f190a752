//! Absence and failure normalization.
//!
//! `Optional::of` and `Optional::map` treat some values as "absent", and
//! `Outcome::of` and `Outcome::map` treat some values as "failed". Which
//! values those are is decided here, per type, at compile time:
//!
//! - [`Nullable`]: `Option<T>` is absent when `None`; the dynamic `Value` is
//!   absent when `Undefined` or `Null`; every plain type is always present.
//! - [`Fallible`]: `Result<T, E>` has failed when `Err`; every plain type has
//!   always succeeded.
//!
//! Both traits use an associated type for the unwrapped value, so a closure
//! returning `i32` and one returning `Option<i32>` both map to `Optional<i32>`
//! without annotations.
//!
//! Implement the traits for your own types with [`plain_value!`](crate::plain_value).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Values that may stand for "nothing".
///
/// # Examples
///
/// ```rust
/// use algebrars::container::Nullable;
///
/// assert_eq!(5_i32.into_present(), Some(5));
/// assert_eq!(None::<i32>.into_present(), None);
/// assert_eq!(Some("x").into_present(), Some("x"));
/// ```
pub trait Nullable {
    /// The value once presence is established.
    type Present;

    /// Returns `None` when `self` is absent.
    fn into_present(self) -> Option<Self::Present>;
}

/// Values that may stand for a captured error of type `E`.
///
/// # Examples
///
/// ```rust
/// use algebrars::container::Fallible;
///
/// let plain: Result<i32, String> = 5_i32.into_result();
/// assert_eq!(plain, Ok(5));
///
/// let failed: Result<i32, String> = Err::<i32, String>(String::from("bad")).into_result();
/// assert_eq!(failed, Err(String::from("bad")));
/// ```
pub trait Fallible<E> {
    /// The value once success is established.
    type Success;

    /// Returns `Err` when `self` is a failure.
    fn into_result(self) -> Result<Self::Success, E>;
}

impl<T> Nullable for Option<T> {
    type Present = T;

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

impl<T, E> Fallible<E> for Result<T, E> {
    type Success = T;

    #[inline]
    fn into_result(self) -> Self {
        self
    }
}

impl<T, E> Nullable for Result<T, E> {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T, E> Fallible<E> for Option<T> {
    type Success = Self;

    #[inline]
    fn into_result(self) -> Result<Self, E> {
        Ok(self)
    }
}

impl<'a, T: ?Sized> Nullable for &'a T {
    type Present = &'a T;

    #[inline]
    fn into_present(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized, E> Fallible<E> for &'a T {
    type Success = &'a T;

    #[inline]
    fn into_result(self) -> Result<&'a T, E> {
        Ok(self)
    }
}

/// Declares types that are never absent and never failed.
///
/// Accepts plain types, or generic types prefixed with their parameters.
///
/// # Examples
///
/// ```rust
/// use algebrars::container::Optional;
/// use algebrars::plain_value;
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
///
/// #[derive(Debug, PartialEq)]
/// struct Tagged<T>(T);
///
/// plain_value!(Meters);
/// plain_value!(<T> Tagged<T>);
///
/// assert_eq!(Optional::of(Meters(1.0)).map(|m| Tagged(m.0)), Optional::some(Tagged(1.0)));
/// ```
#[macro_export]
macro_rules! plain_value {
    ($(<$($generic:ident),+> $generic_type:ty),+ $(,)?) => {
        $(
            impl<$($generic),+> $crate::container::Nullable for $generic_type {
                type Present = Self;

                #[inline]
                fn into_present(self) -> ::std::option::Option<Self> {
                    ::std::option::Option::Some(self)
                }
            }

            impl<$($generic,)+ Failure> $crate::container::Fallible<Failure> for $generic_type {
                type Success = Self;

                #[inline]
                fn into_result(self) -> ::std::result::Result<Self, Failure> {
                    ::std::result::Result::Ok(self)
                }
            }
        )+
    };
    ($($plain_type:ty),* $(,)?) => {
        $(
            impl $crate::container::Nullable for $plain_type {
                type Present = Self;

                #[inline]
                fn into_present(self) -> ::std::option::Option<Self> {
                    ::std::option::Option::Some(self)
                }
            }

            impl<Failure> $crate::container::Fallible<Failure> for $plain_type {
                type Success = Self;

                #[inline]
                fn into_result(self) -> ::std::result::Result<Self, Failure> {
                    ::std::result::Result::Ok(self)
                }
            }
        )*
    };
}

plain_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    ()
);

plain_value!(
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T> Box<T>,
    <T> Rc<T>,
    <T> Arc<T>,
    <T> BTreeSet<T>,
    <T, S> HashSet<T, S>,
    <K, V> BTreeMap<K, V>,
    <K, V, S> HashMap<K, V, S>,
    <T> crate::typeclass::Last<T>,
    <A, B> (A, B),
    <A, B, C> (A, B, C),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plain_values_are_present() {
        assert_eq!(String::from("a").into_present(), Some(String::from("a")));
        assert_eq!(vec![1].into_present(), Some(vec![1]));
        assert_eq!((1, 'a').into_present(), Some((1, 'a')));
    }

    #[rstest]
    fn option_none_is_absent() {
        assert_eq!(Option::<u8>::None.into_present(), None);
    }

    #[rstest]
    fn nested_option_unwraps_one_level() {
        let nested: Option<Option<i32>> = Some(None);
        assert_eq!(nested.into_present(), Some(None));
    }

    #[rstest]
    fn references_are_present() {
        let text = "borrowed";
        assert_eq!(text.into_present(), Some("borrowed"));
    }

    #[rstest]
    fn plain_values_succeed() {
        let result: Result<bool, ()> = true.into_result();
        assert_eq!(result, Ok(true));
    }

    #[rstest]
    fn option_is_plain_for_fallible() {
        let result: Result<Option<i32>, String> = None::<i32>.into_result();
        assert_eq!(result, Ok(None));
    }
}
