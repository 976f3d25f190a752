//! Function composition and currying.
//!
//! - [`compose!`](crate::compose!): right-to-left composition
//! - [`pipe!`](crate::pipe!): left-to-right application
//! - [`compose_all`]: composition of a runtime list of functions
//! - [`curry2`] .. [`curry6`] and the `curry!` macro: [`Curried`] functions
//!   that accept their arguments in batches
//! - [`identity`], [`constant`], [`flip`]
//!
//! # Laws
//!
//! - `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - `compose!(identity, f) == f == compose!(f, identity)`
//! - `flip(flip(f)) == f`
//!
//! # Examples
//!
//! ```rust
//! use algebrars::compose::curry2;
//! use algebrars::typeclass::Callable;
//! use algebrars::{compose, pipe};
//!
//! let scale = curry2(|factor: i32, n: i32| factor * n);
//! let triple = scale.call((3,));
//! let triple_then_negate = compose!(|n: i32| -n, |n: i32| triple.call((n,)));
//!
//! assert_eq!(triple_then_negate(2), -6);
//! assert_eq!(pipe!(2, |n: i32| triple.call((n,)), |n: i32| n + 1), 7);
//! ```

mod compose_macro;
mod curry;
mod pipe_macro;
mod utils;

pub use curry::{Curried, curry2, curry3, curry4, curry5, curry6};
pub use utils::{compose_all, constant, flip, identity};

pub use crate::compose;
pub use crate::pipe;

#[cfg(feature = "derive")]
pub use algebrars_derive::curry;
