//! Argument-keyed result caching.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::typeclass::Callable;

#[cfg(feature = "fxhash")]
type CacheMap<R> = rustc_hash::FxHashMap<String, Arc<R>>;

#[cfg(not(feature = "fxhash"))]
type CacheMap<R> = std::collections::HashMap<String, Arc<R>>;

/// A function wrapped with a result cache.
///
/// Arguments are keyed by their JSON serialization, so two arguments that
/// serialize identically share a cache entry. Arguments that cannot be
/// serialized bypass the cache. Multi-argument functions take a tuple.
///
/// The lock is not held while the wrapped function runs, so a memoized
/// function may call itself through a shared reference.
pub struct Memoized<A, R, F> {
    function: F,
    cache: Mutex<CacheMap<R>>,
    argument: PhantomData<fn(A)>,
}

/// Wraps `function` so repeated calls with an equal argument return the
/// same cached `Arc`.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use algebrars::collection::memoize;
///
/// let slow_square = memoize(|n: u64| n * n);
///
/// let first = slow_square.call(12);
/// let second = slow_square.call(12);
/// assert_eq!(*first, 144);
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoized<A, R, F>
where
    A: Serialize,
    F: Fn(A) -> R,
{
    Memoized {
        function,
        cache: Mutex::new(CacheMap::default()),
        argument: PhantomData,
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Serialize,
    F: Fn(A) -> R,
{
    /// Returns the cached result for `argument`, computing it on a miss.
    pub fn call(&self, argument: A) -> Arc<R> {
        let key = match serde_json::to_string(&argument) {
            Ok(key) => key,
            Err(error) => {
                tracing::trace!(%error, "argument is not serializable, bypassing the cache");
                return Arc::new((self.function)(argument));
            }
        };

        if let Some(cached) = self.cache.lock().get(&key) {
            tracing::trace!(%key, "memoize hit");
            return Arc::clone(cached);
        }

        tracing::trace!(%key, "memoize miss");
        let computed = Arc::new((self.function)(argument));
        Arc::clone(self.cache.lock().entry(key).or_insert(computed))
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl<A, R, F> Callable<A> for Memoized<A, R, F>
where
    A: Serialize,
    F: Fn(A) -> R,
{
    type Output = Arc<R>;

    fn call(&self, argument: A) -> Arc<R> {
        Self::call(self, argument)
    }
}
