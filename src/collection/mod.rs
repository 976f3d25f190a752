//! Collection helpers and memoization.
//!
//! The list functions never mutate their input: [`partition`],
//! [`compact`], [`flatten`], [`flatten_deep`], [`swap`], [`parts`],
//! [`to_pairs`], [`sorted`], [`sorted_by_key`], [`head`], [`tail`], [`slice`].
//!
//! [`memoize`] caches results keyed by the serialized argument.

mod list;
mod memoize;

pub use list::{
    compact, flatten, flatten_deep, head, partition, parts, slice, sorted, sorted_by_key, swap,
    tail, to_pairs,
};
pub use memoize::{Memoized, memoize};
