//! Type class traits shared by the containers.
//!
//! - [`Functor`]: mapping over a held value
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: chaining computations that return containers
//! - [`Semigroup`]: the associative `concat` operation
//! - [`Callable`]: calling a value with an argument tuple (curried functions, effects)
//!
//! ## Higher-Kinded Types Emulation
//!
//! [`TypeConstructor`] uses Generic Associated Types to describe "the same
//! container around a different type", which the traits above need to state
//! their signatures once.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::container::Optional;
//! use algebrars::typeclass::{Functor, Monad, Semigroup};
//!
//! let total = Optional::some(2)
//!     .fmap(|n| n * 10)
//!     .flat_map(|n| Optional::some(n + 1))
//!     .combine(Optional::some(100));
//! assert_eq!(total, Optional::some(121));
//! ```

mod applicative;
mod callable;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use callable::Callable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::{Last, Semigroup};

#[cfg(feature = "derive")]
pub use algebrars_derive::Semigroup;
