//! `Outcome` - a success value or a captured error.
//!
//! The failure state absorbs: `map`, `apply` and `bind` on a failed
//! `Outcome` return the same failure without calling the supplied function.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::container::Outcome;
//!
//! let parse = |text: &str| Outcome::of(text.parse::<i32>());
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.match_with(|n| n.to_string(), |error| error.to_string()), "42");
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.is_failure());
//! ```

use super::normalize::Fallible;
use super::optional::Optional;
use crate::typeclass::{Applicative, Functor, Monad, Semigroup, TypeConstructor};

/// Either a success of type `T` or a failure of type `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Outcome<T, E> {
    value: Result<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// Wraps `value`; an `Err` becomes a failure, anything else a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::of(5_i32);
    /// assert!(success.is_success());
    ///
    /// let failure = Outcome::of(Err::<i32, _>("bad"));
    /// assert!(failure.is_failure());
    /// ```
    #[inline]
    pub fn of<V>(value: V) -> Self
    where
        V: Fallible<E, Success = T>,
    {
        Self {
            value: value.into_result(),
        }
    }

    /// A successful `Outcome`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { value: Ok(value) }
    }

    /// A failed `Outcome`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self { value: Err(error) }
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.value.is_ok()
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.value.is_err()
    }

    /// Transforms the success value; an `Err` result becomes a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Outcome;
    ///
    /// let checked = |n: i32| if n > 0 { Ok(n) } else { Err(String::from("not positive")) };
    ///
    /// let positive: Outcome<i32, String> = Outcome::success(3);
    /// assert_eq!(positive.map(checked), Outcome::success(3));
    ///
    /// let negative: Outcome<i32, String> = Outcome::success(-3);
    /// assert_eq!(negative.map(checked), Outcome::failure(String::from("not positive")));
    /// ```
    pub fn map<V, F>(self, function: F) -> Outcome<V::Success, E>
    where
        F: FnOnce(T) -> V,
        V: Fallible<E>,
    {
        match self.value {
            Ok(value) => Outcome::of(function(value)),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Applies the function held by `other` to the success value.
    ///
    /// A failed `other` wins over a failed `self`, since the function side is
    /// inspected first.
    pub fn apply<V, F>(self, other: Outcome<F, E>) -> Outcome<V::Success, E>
    where
        F: FnOnce(T) -> V,
        V: Fallible<E>,
    {
        match other.value {
            Ok(function) => self.map(function),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Chains a computation that itself returns an `Outcome`.
    pub fn bind<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        match self.value {
            Ok(value) => function(value),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Combines the success value with `value` through [`Semigroup`].
    ///
    /// A failed `self` is replaced by `Outcome::of(value)`; a failing `value`
    /// replaces a successful `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Outcome;
    ///
    /// let greeting: Outcome<String, ()> = Outcome::success(String::from("foo"));
    /// assert_eq!(greeting.concat(String::from("bar")), Outcome::success(String::from("foobar")));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(failed.concat(7), Outcome::success(7));
    /// ```
    pub fn concat<V>(self, value: V) -> Self
    where
        V: Fallible<E, Success = T>,
        T: Semigroup,
    {
        match (self.value, value.into_result()) {
            (Ok(held), Ok(value)) => Self::success(held.combine(value)),
            (_, value) => Self { value },
        }
    }

    /// Runs `on_success` or `on_failure`; exactly one of them runs.
    pub fn match_with<R, S, X>(self, on_success: S, on_failure: X) -> R
    where
        S: FnOnce(T) -> R,
        X: FnOnce(E) -> R,
    {
        match self.value {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// Borrows the held value or error.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        Outcome {
            value: self.value.as_ref(),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.value
    }

    /// Discards the error, keeping the success as an [`Optional`].
    pub fn ok(self) -> Optional<T> {
        self.value.ok().into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        Self { value }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.value
    }
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T, E> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        Outcome {
            value: self.value.map(function),
        }
    }
}

impl<T, E> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::success(value)
    }

    fn ap<B, F>(self, function: Outcome<F, E>) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map2(function, |value, function| function(value))
    }

    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self.value, other.value) {
            (Ok(left), Ok(right)) => Outcome::success(function(left, right)),
            (Err(error), _) | (_, Err(error)) => Outcome::failure(error),
        }
    }
}

impl<T, E> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.bind(function)
    }
}

impl<T: Semigroup, E> Semigroup for Outcome<T, E> {
    fn combine(self, other: Self) -> Self {
        self.concat(other.value)
    }
}
