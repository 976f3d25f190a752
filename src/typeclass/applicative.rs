//! Applicative type class - applying a function held in another container.
//!
//! The argument order follows the containers' own `apply`: the receiver holds
//! the value and the argument holds the function. Either side being in its
//! absorbing state yields the absorbing state.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! v.ap(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(x).ap(pure(f)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebrars::container::Optional;
//! use algebrars::typeclass::Applicative;
//!
//! let function = Optional::some(|n: i32| n * 10);
//! assert_eq!(Optional::some(4).ap(function), Optional::some(40));
//!
//! let missing: Optional<fn(i32) -> i32> = Optional::none();
//! assert!(Optional::some(4).ap(missing).is_absent());
//! ```

use super::functor::Functor;

/// A `Functor` that can lift values and apply wrapped functions.
pub trait Applicative: Functor {
    /// Lifts a plain value into the container's non-absorbing state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    /// use algebrars::typeclass::Applicative;
    ///
    /// let lifted: Optional<&str> = Optional::<()>::pure("hi");
    /// assert_eq!(lifted, Optional::some("hi"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the function held by `function` to the value held by `self`.
    fn ap<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Combines two independent containers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Outcome;
    /// use algebrars::typeclass::Applicative;
    ///
    /// let left: Outcome<i32, String> = Outcome::success(2);
    /// let right: Outcome<i32, String> = Outcome::success(3);
    /// assert_eq!(left.map2(right, |a, b| a * b), Outcome::success(6));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |left, right| (left, right))
    }
}
