//! `Effect` - a lazily transformed, possibly asynchronous computation.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use super::deferred::Deferred;
use crate::typeclass::{Callable, TypeConstructor};

/// A wrapped function whose eventual result can be transformed before it runs.
///
/// `Args` is the argument tuple (`()` for a thunk). Building an effect and
/// chaining [`map`](Effect::map) never runs anything; every
/// [`call`](Effect::call) runs the wrapped function once and then each
/// mapping in registration order.
///
/// # Examples
///
/// ```rust
/// use algebrars::effect::Effect;
///
/// let area = Effect::sync(|(width, height): (u32, u32)| width * height)
///     .map(|square| format!("{square} m2"));
///
/// assert_eq!(area.call((3, 4)).into_ready().ok(), Some(String::from("12 m2")));
/// ```
pub struct Effect<Args, T> {
    run: Arc<dyn Fn(Args) -> Deferred<T> + Send + Sync>,
}

impl<Args: 'static, T: 'static> Effect<Args, T> {
    /// Wraps a function that returns a [`Deferred`].
    pub fn of<F>(function: F) -> Self
    where
        F: Fn(Args) -> Deferred<T> + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(function),
        }
    }

    /// Wraps a synchronous function.
    pub fn sync<F>(function: F) -> Self
    where
        F: Fn(Args) -> T + Send + Sync + 'static,
    {
        Self::of(move |arguments| Deferred::Ready(function(arguments)))
    }

    /// Wraps a function returning a future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Effect;
    ///
    /// # futures::executor::block_on(async {
    /// let fetch = Effect::deferred(|id: u32| async move { format!("user-{id}") })
    ///     .map(|name| name.to_uppercase());
    /// assert_eq!(fetch.call(7).await, "USER-7");
    /// # });
    /// ```
    pub fn deferred<F, Fut>(function: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::of(move |arguments| Deferred::pending(function(arguments)))
    }

    /// Registers a transformation of the eventual result.
    ///
    /// Nothing is invoked; `function` runs once per later [`call`](Effect::call),
    /// after the wrapped function and every earlier mapping.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Effect<Args, B>
    where
        B: 'static,
        F: Fn(T) -> B + Send + Sync + 'static,
    {
        let run = self.run;
        let function = Arc::new(function);
        Effect::of(move |arguments| {
            let function = Arc::clone(&function);
            run(arguments).map(move |value| function(value))
        })
    }

    /// Runs the computation with `arguments`.
    #[inline]
    pub fn call(&self, arguments: Args) -> Deferred<T> {
        (self.run)(arguments)
    }
}

impl<Args, T> Clone for Effect<Args, T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<Args, T> fmt::Debug for Effect<Args, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Effect(..)")
    }
}

impl<Args, T> TypeConstructor for Effect<Args, T> {
    type Inner = T;
    type WithType<B> = Effect<Args, B>;
}

impl<Args: 'static, T: 'static> Callable<Args> for Effect<Args, T> {
    type Output = Deferred<T>;

    fn call(&self, arguments: Args) -> Deferred<T> {
        Self::call(self, arguments)
    }
}

static_assertions::assert_impl_all!(Effect<(), i32>: Send, Sync, Clone);
