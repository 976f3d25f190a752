//! Non-mutating list helpers.
//!
//! Every function returns a new collection; inputs are borrowed or consumed
//! but never modified in place.

use crate::container::{Nullable, Optional};
use crate::dynamic::Value;

/// Splits `items` into those satisfying `predicate` and the rest, keeping order.
///
/// # Examples
///
/// ```rust
/// use algebrars::collection::partition;
///
/// let (even, odd) = partition(1..=6, |n| n % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<T, I, P>(items: I, predicate: P) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    P: Fn(&T) -> bool,
{
    items.into_iter().partition(|item| predicate(item))
}

/// Drops absent entries (`None`, `Value::Null`, `Value::Undefined`).
///
/// # Examples
///
/// ```rust
/// use algebrars::collection::compact;
///
/// assert_eq!(compact([Some(1), None, Some(3)]), vec![1, 3]);
/// ```
pub fn compact<V, I>(items: I) -> Vec<V::Present>
where
    I: IntoIterator<Item = V>,
    V: Nullable,
{
    items.into_iter().filter_map(Nullable::into_present).collect()
}

/// Flattens one level of nesting.
pub fn flatten<T, I, J>(nested: I) -> Vec<T>
where
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Flattens arbitrarily nested `Value::Array`s into one list.
///
/// # Examples
///
/// ```rust
/// use algebrars::collection::flatten_deep;
/// use algebrars::dynamic::Value;
///
/// let nested = [Value::from(1), Value::array([Value::from(2), Value::array([3])])];
/// assert_eq!(flatten_deep(&nested), vec![Value::from(1), Value::from(2), Value::from(3)]);
/// ```
pub fn flatten_deep(values: &[Value]) -> Vec<Value> {
    let mut flat = Vec::with_capacity(values.len());
    collect_leaves(values, &mut flat);
    flat
}

fn collect_leaves(values: &[Value], flat: &mut Vec<Value>) {
    for value in values {
        match value {
            Value::Array(items) => collect_leaves(items, flat),
            leaf => flat.push(leaf.clone()),
        }
    }
}

/// A copy of `items` with the elements at `first` and `second` exchanged.
///
/// Out-of-range indices leave the copy unchanged.
pub fn swap<T: Clone>(items: &[T], first: usize, second: usize) -> Vec<T> {
    let mut swapped = items.to_vec();
    if first < swapped.len() && second < swapped.len() {
        swapped.swap(first, second);
    }
    swapped
}

/// Splits `items` into consecutive parts of `size` elements; the last part
/// may be shorter.
///
/// A `size` of zero yields a single part holding everything, and an empty
/// input yields no parts.
///
/// # Examples
///
/// ```rust
/// use algebrars::collection::parts;
///
/// assert_eq!(parts(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(parts(&[1, 2], 0), vec![vec![1, 2]]);
/// ```
pub fn parts<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    if size == 0 {
        return vec![items.to_vec()];
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Key/value pairs of an object or instance, or index/element pairs of an
/// array. Any other value has no pairs.
pub fn to_pairs(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, field)| (key.clone(), field.clone()))
            .collect(),
        Value::Instance(instance) => to_pairs(&Value::Object(instance.fields().clone())),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

/// A sorted copy of `items`.
pub fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.sort();
    copy
}

/// A copy of `items` sorted by `key`; equal keys keep their order.
pub fn sorted_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut copy = items.to_vec();
    copy.sort_by_key(key);
    copy
}

/// The first element.
pub fn head<T: Clone>(items: &[T]) -> Optional<T> {
    items.first().cloned().into()
}

/// Everything after the first element.
pub fn tail<T: Clone>(items: &[T]) -> Vec<T> {
    items.get(1..).map_or_else(Vec::new, <[T]>::to_vec)
}

/// Elements from `start` up to, not including, `end`.
///
/// Negative positions count from the end. Positions are clamped to the
/// list, and an empty range yields an empty list.
///
/// # Examples
///
/// ```rust
/// use algebrars::collection::slice;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// assert_eq!(slice(&letters, 1, 3), vec!['b', 'c']);
/// assert_eq!(slice(&letters, -2, 10), vec!['c', 'd']);
/// assert!(slice(&letters, 3, 1).is_empty());
/// ```
pub fn slice<T: Clone>(items: &[T], start: isize, end: isize) -> Vec<T> {
    let from = resolve(start, items.len());
    let to = resolve(end, items.len());
    if from >= to {
        return Vec::new();
    }
    items[from..to].to_vec()
}

fn resolve(position: isize, length: usize) -> usize {
    if position < 0 {
        length.saturating_sub(position.unsigned_abs())
    } else {
        position.unsigned_abs().min(length)
    }
}
