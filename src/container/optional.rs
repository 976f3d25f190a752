//! `Optional` - a possibly absent value.
//!
//! Once an `Optional` is absent, `map`, `apply` and `bind` return absence
//! without calling the supplied function, no matter how long the chain is.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::container::Optional;
//!
//! let shout = |name: Optional<&str>| {
//!     name.map(|text| text.to_uppercase())
//!         .map(|text| format!("{text}!"))
//!         .match_with(|text| text, || String::from("(silence)"))
//! };
//!
//! assert_eq!(shout(Optional::of("hey")), "HEY!");
//! assert_eq!(shout(Optional::none()), "(silence)");
//! ```

use super::normalize::Nullable;
use super::outcome::Outcome;
use crate::typeclass::{Applicative, Functor, Monad, Semigroup, TypeConstructor};

/// A value that is either present or absent.
///
/// Construct with [`Optional::of`] (absence-normalizing), [`Optional::some`]
/// or [`Optional::none`]. Every operation returns a new `Optional`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Wraps `value`, producing absence when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    ///
    /// assert!(Optional::of(42_i32).is_present());
    /// assert!(Optional::of(None::<i32>).is_absent());
    /// assert_eq!(Optional::of(Some("x")), Optional::some("x"));
    /// ```
    #[inline]
    pub fn of<V>(value: V) -> Self
    where
        V: Nullable<Present = T>,
    {
        Self {
            value: value.into_present(),
        }
    }

    /// A present `Optional` holding `value`.
    ///
    /// Unlike [`Optional::of`], `some` does not normalize: a value that
    /// [`Nullable`] treats as absent (such as a dynamic null) is still held
    /// as present. `Functor::fmap` and `Applicative::pure` do not normalize
    /// either; use `of` or the inherent `map` for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    ///
    /// assert!(Optional::some(None::<i32>).is_present());
    /// assert!(Optional::of(None::<i32>).is_absent());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// An absent `Optional`.
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// Returns `true` when a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` when no value is held.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Transforms the held value, normalizing an absent result to absence.
    ///
    /// `function` is not called when `self` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    ///
    /// assert_eq!(Optional::some(2).map(|n| n * 3), Optional::some(6));
    ///
    /// let lookup = |key: &str| if key == "known" { Some(1) } else { None };
    /// assert!(Optional::some("unknown").map(lookup).is_absent());
    /// ```
    pub fn map<V, F>(self, function: F) -> Optional<V::Present>
    where
        F: FnOnce(T) -> V,
        V: Nullable,
    {
        match self.value {
            Some(value) => Optional::of(function(value)),
            None => Optional::none(),
        }
    }

    /// Applies the function held by `other` to the held value.
    ///
    /// Absent when either side is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    ///
    /// let increment = Optional::some(|n: i32| n + 1);
    /// assert_eq!(Optional::some(1).apply(increment), Optional::some(2));
    /// ```
    pub fn apply<V, F>(self, other: Optional<F>) -> Optional<V::Present>
    where
        F: FnOnce(T) -> V,
        V: Nullable,
    {
        match other.value {
            Some(function) => self.map(function),
            None => Optional::none(),
        }
    }

    /// Chains a computation that itself returns an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    ///
    /// let first_char = |text: &str| Optional::of(text.chars().next());
    /// assert_eq!(Optional::some("abc").bind(first_char), Optional::some('a'));
    /// assert!(Optional::some("").bind(first_char).is_absent());
    /// ```
    pub fn bind<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        match self.value {
            Some(value) => function(value),
            None => Optional::none(),
        }
    }

    /// Combines the held value with `value` through [`Semigroup`].
    ///
    /// An absent `self` is replaced by `Optional::of(value)`; an absent
    /// `value` replaces a present `self` with absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    ///
    /// assert_eq!(Optional::some(42).concat(1), Optional::some(43));
    /// assert_eq!(
    ///     Optional::some(String::from("foo")).concat(String::from("bar")),
    ///     Optional::some(String::from("foobar"))
    /// );
    /// assert_eq!(Optional::none().concat(vec![1]), Optional::some(vec![1]));
    /// ```
    pub fn concat<V>(self, value: V) -> Self
    where
        V: Nullable<Present = T>,
        T: Semigroup,
    {
        match (self.value, value.into_present()) {
            (Some(held), Some(value)) => Self::some(held.combine(value)),
            (_, value) => Self { value },
        }
    }

    /// Runs `on_some` with the held value, or `on_none` when absent.
    ///
    /// Exactly one of the two closures runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    ///
    /// assert_eq!(Optional::some(5).match_with(|x| x, || 0), 5);
    /// assert_eq!(Optional::<i32>::none().match_with(|_| "x", || "y"), "y");
    /// ```
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.value {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Converts into an [`Outcome`], failing with `error` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::some(1).ok_or("missing"), Outcome::success(1));
    /// assert_eq!(Optional::<i32>::none().ok_or("missing"), Outcome::failure("missing"));
    /// ```
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        self.value.ok_or(error).into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Functor for Optional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        Optional {
            value: self.value.map(function),
        }
    }
}

impl<T> Applicative for Optional<T> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::some(value)
    }

    fn ap<B, F>(self, function: Optional<F>) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map2(function, |value, function| function(value))
    }

    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self.value, other.value) {
            (Some(left), Some(right)) => Optional::some(function(left, right)),
            _ => Optional::none(),
        }
    }
}

impl<T> Monad for Optional<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        self.bind(function)
    }
}

/// Container-level `concat`: combines with another `Optional`'s held value.
impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(other.value)
    }
}
