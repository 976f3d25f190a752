//! Dynamic values with runtime type tests.
//!
//! Statically typed code uses trait bounds. Data whose shape is only known at
//! runtime (parsed JSON, plugin payloads) is modelled as a [`Value`] and
//! inspected with:
//!
//! - [`is`] / [`is_a`]: type tests against a [`Tag`]
//! - [`Matcher`] / [`match_value`]: first-match dispatch on literal or type name
//! - [`get`] / [`pluck`]: dotted-path lookup
//!
//! `Value` is also a [`Semigroup`](crate::typeclass::Semigroup) whose
//! `combine` dispatches on the runtime kinds of both operands, so an
//! `Optional<Value>` concatenates the way loosely typed data expects.

mod matcher;
mod path;
mod tag;
mod value;

pub use matcher::{Matcher, WILDCARD, match_value};
pub use path::{SEPARATOR, get, getter, pluck};
pub use tag::{Tag, is, is_a};
pub use value::{Class, Function, Instance, Kind, Object, Symbol, Value};
