//! Procedural macros for `algebrars`.
//!
//! - [`curry!`]: turns a closure or a function path into an
//!   `algebrars::compose::Curried` value
//! - [`Semigroup`]: derives field-wise `combine` for structs
//!
//! Both macros expand to `::algebrars::...` paths, so they are meant to be
//! used through the `algebrars` re-exports.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod semigroup;

use proc_macro::TokenStream;

/// Curries a closure or a function of two to six arguments.
///
/// The closure form takes the arity from the closure's parameter list; a
/// function path needs the arity spelled out.
///
/// ```rust,ignore
/// use algebrars::compose::curry;
/// use algebrars::typeclass::Callable;
///
/// let add = curry!(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(add.call((1,)).call((2, 3)), 6);
///
/// fn scale(factor: f64, value: f64) -> f64 { factor * value }
/// let half = curry!(scale, 2).call((0.5,));
/// assert_eq!(half.call((8.0,)), 4.0);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}

/// Derives `algebrars::typeclass::Semigroup` by combining every field.
///
/// Each field type must itself be a `Semigroup`. Type parameters receive a
/// `Semigroup` bound. Enums and unions are rejected.
///
/// ```rust,ignore
/// use algebrars::typeclass::Semigroup;
///
/// #[derive(Semigroup)]
/// struct Totals {
///     count: u32,
///     names: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    semigroup::derive_semigroup_impl(input)
}
