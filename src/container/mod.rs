//! Algebraic containers with an absorbing state.
//!
//! - [`Optional`]: present value or absence
//! - [`Outcome`]: success value or captured error
//!
//! Both offer the same five operations: `map`, `apply`, `bind`, `concat` and
//! `match_with`. Once a container is absent or failed, `map`, `apply` and
//! `bind` return it unchanged without calling their function argument.
//!
//! Absence and failure are detected per type through [`Nullable`] and
//! [`Fallible`]; see [`plain_value!`](crate::plain_value) for opting custom
//! types in.
//!
//! [`attempt`] turns a panicking function into one returning an [`Outcome`].
//!
//! # Examples
//!
//! ```rust
//! use algebrars::container::{Optional, Outcome};
//!
//! let age = Optional::of(Some("42"))
//!     .map(|text| text.parse::<u8>().ok())
//!     .ok_or("missing or invalid age");
//! assert_eq!(age, Outcome::success(42));
//! ```

mod attempt;
mod normalize;
mod optional;
mod outcome;

pub use attempt::attempt;
pub use normalize::{Fallible, Nullable};
pub use optional::Optional;
pub use outcome::Outcome;
