//! Dotted-path lookup into nested values.

use super::value::Value;
use crate::container::Optional;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Follows `path` through objects, instance fields and array indices.
///
/// An empty path addresses `value` itself. A missing segment, an
/// out-of-range index, or an absent value at the end all yield an absent
/// `Optional`.
///
/// # Examples
///
/// ```rust
/// use algebrars::dynamic::{Value, get};
///
/// let order = Value::object([(
///     "items",
///     Value::array([Value::object([("sku", "A-1")])]),
/// )]);
///
/// assert_eq!(get(&order, "items.0.sku").into_option(), Some(Value::from("A-1")));
/// assert!(get(&order, "items.3.sku").is_absent());
/// ```
pub fn get(value: &Value, path: &str) -> Optional<Value> {
    let found = if path.is_empty() {
        Some(value)
    } else {
        path.split(SEPARATOR)
            .try_fold(value, |current, segment| current.member(segment))
    };
    found.map_or_else(Optional::none, |value| Optional::of(value.clone()))
}

/// Reads `path` from every item; misses become `Value::Undefined`.
///
/// # Examples
///
/// ```rust
/// use algebrars::dynamic::{Value, pluck};
///
/// let people = [
///     Value::object([("name", "Ada")]),
///     Value::object([("age", 36)]),
/// ];
/// assert_eq!(pluck("name", &people), vec![Value::from("Ada"), Value::Undefined]);
/// ```
pub fn pluck(path: &str, items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .map(|item| get(item, path).unwrap_or(Value::Undefined))
        .collect()
}

/// The curried form of [`get`] with the path fixed first.
pub fn getter(path: &str) -> impl Fn(&Value) -> Optional<Value> + '_ {
    move |value| get(value, path)
}
