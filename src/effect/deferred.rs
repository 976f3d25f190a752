//! `Deferred` - a value available now or after a future completes.

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::future::{self, BoxFuture, Either, FutureExt, Ready};

/// The result of calling an [`Effect`](super::Effect).
///
/// Synchronous computations produce [`Deferred::Ready`] and never touch an
/// executor. Asynchronous ones produce [`Deferred::Pending`]; awaiting is the
/// caller's business. Both shapes can be awaited through [`IntoFuture`].
///
/// # Examples
///
/// ```rust
/// use algebrars::effect::Deferred;
///
/// let ready = Deferred::ready(20).map(|n| n + 1);
/// assert_eq!(ready.into_ready().ok(), Some(21));
///
/// # futures::executor::block_on(async {
/// let pending = Deferred::pending(async { 20 }).map(|n| n * 2);
/// assert!(!pending.is_ready());
/// assert_eq!(pending.await, 40);
/// # });
/// ```
pub enum Deferred<T> {
    /// Already computed.
    Ready(T),
    /// Computed when the future completes.
    Pending(BoxFuture<'static, T>),
}

impl<T> Deferred<T> {
    /// A value that is already available.
    #[inline]
    pub const fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    /// A value produced by `future`.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::Pending(future.boxed())
    }

    /// Returns `true` when no awaiting is needed.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Transforms the value: immediately when ready, on completion otherwise.
    pub fn map<B, F>(self, function: F) -> Deferred<B>
    where
        T: 'static,
        F: FnOnce(T) -> B + Send + 'static,
    {
        match self {
            Self::Ready(value) => Deferred::Ready(function(value)),
            Self::Pending(future) => Deferred::Pending(future.map(function).boxed()),
        }
    }

    /// Extracts a ready value, or hands back the pending computation.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the value is still pending.
    pub fn into_ready(self) -> Result<T, Self> {
        match self {
            Self::Ready(value) => Ok(value),
            pending @ Self::Pending(_) => Err(pending),
        }
    }
}

impl<T> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<T> IntoFuture for Deferred<T> {
    type Output = T;
    type IntoFuture = Either<Ready<T>, BoxFuture<'static, T>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(value) => Either::Left(future::ready(value)),
            Self::Pending(future) => Either::Right(future),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => formatter.debug_tuple("Ready").field(value).finish(),
            Self::Pending(_) => formatter.write_str("Pending(..)"),
        }
    }
}
