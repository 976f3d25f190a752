//! Error types raised by the library itself.
//!
//! Absence and failure inside containers are values, not errors. The only
//! conditions reported through [`Error`] are a structural `match` that finds
//! no arm, and a panic captured by [`attempt`](crate::container::attempt).

use thiserror::Error;

/// Errors produced by algebrars operations.
///
/// # Examples
///
/// ```rust
/// use algebrars::Error;
///
/// let error = Error::NoMatch { value: String::from("\"baz\"") };
/// assert_eq!(error.to_string(), "no match found for value: \"baz\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No matcher key accepted the value and no `_` fallback was declared.
    #[error("no match found for value: {value}")]
    NoMatch {
        /// Display form of the unmatched value.
        value: String,
    },

    /// A function wrapped by `attempt` panicked.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The panic payload when it was a string, otherwise a placeholder.
        message: String,
    },
}

/// Result alias defaulting the error type to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
