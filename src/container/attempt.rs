//! Panic-catching wrapper, the library's try/catch combinator.
//!
//! Container operations never catch panics raised by caller-supplied
//! functions. Callers that want a panic turned into a value wrap the function
//! with [`attempt`] first.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::outcome::Outcome;
use crate::error::Error;

/// Wraps `function` so that a panic becomes `Outcome::failure(Error::Panicked)`.
///
/// The default panic hook still runs, so the panic message is printed to
/// stderr as usual.
///
/// # Examples
///
/// ```rust
/// use algebrars::container::attempt;
///
/// let divide = attempt(|(numerator, denominator): (i32, i32)| numerator / denominator);
///
/// assert_eq!(divide((10, 2)).into_result(), Ok(5));
/// assert!(divide((1, 0)).is_failure());
/// ```
pub fn attempt<A, T, F>(function: F) -> impl Fn(A) -> Outcome<T, Error>
where
    F: Fn(A) -> T,
{
    move |argument| match catch_unwind(AssertUnwindSafe(|| function(argument))) {
        Ok(value) => Outcome::success(value),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::debug!(%message, "attempt captured a panic");
            Outcome::failure(Error::Panicked { message })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        String::from("unknown panic")
    }
}
