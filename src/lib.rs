//! # algebrars
//!
//! Algebraic containers and point-free combinators for Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Semigroup`, `Callable`
//! - **Containers**: [`Optional`](container::Optional) (absence short-circuits),
//!   [`Outcome`](container::Outcome) (failure short-circuits)
//! - **Effects**: [`Effect`](effect::Effect), a lazily transformed computation
//!   that may complete synchronously or through a future
//! - **Function Composition**: `compose!`, `pipe!`, `curry!` and the `curry2`..`curry6` constructors
//! - **Dynamic Values**: a closed [`Value`](dynamic::Value) model with the `is`
//!   predicate, structural `match`, and dotted-path lookup
//! - **Collections**: partition, compact, parts, memoize and friends
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `container`: `Optional`, `Outcome`, `attempt`
//! - `compose`: Function composition and currying
//! - `dynamic`: `Value`, `Tag`, `is`, `Matcher`, `get`/`pluck`
//! - `effect`: `Effect` and `Deferred`
//! - `collection`: List helpers and `memoize`
//! - `derive`: `curry!` and `#[derive(Semigroup)]`
//! - `serde`: Serialization of containers and values
//! - `fxhash`: Use `rustc-hash` for the memoization cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use algebrars::prelude::*;
//!
//! let greeting = Optional::of("world")
//!     .map(|name| format!("hello, {name}"))
//!     .match_with(|text| text, || String::from("nobody"));
//! assert_eq!(greeting, "hello, world");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets the derive crate's `::algebrars::...` paths resolve inside this crate.
extern crate self as algebrars;

/// Prelude module for convenient imports.
///
/// ```rust
/// use algebrars::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::{Error, Result};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

pub mod error;

pub use error::{Error, Result};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "collection")]
pub mod collection;
