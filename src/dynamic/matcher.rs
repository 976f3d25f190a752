//! Standalone structural `match` over dynamic values.
//!
//! A [`Matcher`] is an ordered list of `(key, handler)` cases. The first case
//! whose key equals the value itself, equals the value's type name, or is the
//! wildcard `_` wins. A [`Value::Function`] handler is called with the value;
//! any other handler is returned as is.

use super::value::Value;
use crate::error::{Error, Result};

/// The key that matches every value.
pub const WILDCARD: &str = "_";

/// An ordered set of match cases.
///
/// # Examples
///
/// ```rust
/// use algebrars::dynamic::{Matcher, Value};
///
/// let describe = Matcher::new()
///     .case("Number", Value::function(|n| Value::from(format!("number {n}"))))
///     .case("ping", "pong")
///     .case("_", "something else");
///
/// assert_eq!(describe.run(&Value::from(3)).ok(), Some(Value::from("number 3")));
/// assert_eq!(describe.run(&Value::from("ping")).ok(), Some(Value::from("pong")));
/// assert_eq!(describe.run(&Value::Null).ok(), Some(Value::from("something else")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matcher {
    cases: Vec<(String, Value)>,
}

impl Matcher {
    /// A matcher with no cases; it rejects every value.
    #[must_use]
    pub const fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Appends a case. Earlier cases take precedence.
    #[must_use]
    pub fn case(mut self, key: impl Into<String>, handler: impl Into<Value>) -> Self {
        self.cases.push((key.into(), handler.into()));
        self
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` when there are no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Dispatches `value` to the first matching case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when no case accepts the value.
    pub fn run(&self, value: &Value) -> Result<Value> {
        let Some((_, handler)) = self.cases.iter().find(|(key, _)| accepts(key, value)) else {
            tracing::debug!(%value, cases = self.cases.len(), "no match case accepted the value");
            return Err(Error::NoMatch {
                value: value.to_string(),
            });
        };
        Ok(match handler {
            Value::Function(function) => function.call(value.clone()),
            literal => literal.clone(),
        })
    }

    /// Turns the matcher into a reusable function.
    pub fn into_fn(self) -> impl Fn(&Value) -> Result<Value> {
        move |value| self.run(value)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Matcher
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(cases: [(K, V); N]) -> Self {
        cases
            .into_iter()
            .fold(Self::new(), |matcher, (key, handler)| matcher.case(key, handler))
    }
}

impl<K, V> FromIterator<(K, V)> for Matcher
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(cases: I) -> Self {
        cases
            .into_iter()
            .fold(Self::new(), |matcher, (key, handler)| matcher.case(key, handler))
    }
}

fn accepts(key: &str, value: &Value) -> bool {
    key == WILDCARD
        || matches!(value, Value::String(text) if text == key)
        || (!value.is_absent() && value.type_name() == key)
}

/// Runs `matcher` against `value`; see [`Matcher::run`].
///
/// # Errors
///
/// Returns [`Error::NoMatch`] when no case accepts the value.
pub fn match_value(matcher: &Matcher, value: &Value) -> Result<Value> {
    matcher.run(value)
}
