//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` runs a function that itself returns a container and flattens
//! the result instead of nesting it.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                  // left identity
//! m.flat_map(pure) == m                                        // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebrars::container::Optional;
//! use algebrars::typeclass::Monad;
//!
//! fn half(n: i32) -> Optional<i32> {
//!     if n % 2 == 0 { Optional::some(n / 2) } else { Optional::none() }
//! }
//!
//! assert_eq!(Optional::some(8).flat_map(half).flat_map(half), Optional::some(2));
//! assert!(Optional::some(6).flat_map(half).flat_map(half).is_absent());
//! ```

use super::applicative::Applicative;

/// An `Applicative` supporting dependent chaining.
pub trait Monad: Applicative {
    /// Runs `function` on the held value and flattens the returned container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding `self`'s value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
