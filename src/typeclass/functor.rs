//! Functor type class - mapping over a held value.
//!
//! A `Functor` transforms the value inside a container while keeping the
//! container's shape: an absent `Optional` stays absent, a failed `Outcome`
//! keeps its error.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebrars::container::Optional;
//! use algebrars::typeclass::Functor;
//!
//! let length = Optional::some(String::from("abc")).fmap(|text| text.len());
//! assert_eq!(length, Optional::some(3));
//!
//! let absent: Optional<String> = Optional::none();
//! assert!(absent.fmap(|text| text.len()).is_absent());
//! ```

use super::higher::TypeConstructor;

/// Containers whose held value can be transformed in place of shape.
///
/// `fmap` is the structural map: it never changes a present container into
/// an absorbing one. The containers' inherent `map` methods additionally
/// normalize absent or failing results; `fmap` is the lawful core beneath them.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Outcome;
    /// use algebrars::typeclass::Functor;
    ///
    /// let doubled: Outcome<i32, String> = Outcome::success(21).fmap(|n| n * 2);
    /// assert_eq!(doubled, Outcome::success(42));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the held value with `value`, keeping the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::container::Optional;
    /// use algebrars::typeclass::Functor;
    ///
    /// assert_eq!(Optional::some(5).replace("five"), Optional::some("five"));
    /// assert!(Optional::<i32>::none().replace("five").is_absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
