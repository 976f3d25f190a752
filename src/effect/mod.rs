//! Deferred computations.
//!
//! An [`Effect`] wraps a function whose result may be available immediately
//! or only after a future completes. Transformations are registered with
//! `map` and run only when the effect is called:
//!
//! ```rust
//! use algebrars::effect::Effect;
//!
//! let greet = Effect::sync(|name: &'static str| format!("hi {name}")).map(|text| text.len());
//! assert_eq!(greet.call("bo").into_ready().ok(), Some(5));
//! ```
//!
//! Calling returns a [`Deferred`], which can be inspected synchronously or
//! awaited on any executor. The crate never spawns tasks itself.

mod deferred;
#[allow(clippy::module_inception)]
mod effect;

pub use deferred::Deferred;
pub use effect::Effect;
