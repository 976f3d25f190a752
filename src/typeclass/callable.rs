//! Callable type class - invoking a value with a tuple of arguments.
//!
//! Rust closures have a fixed arity, so values that accept arguments in
//! variable-sized batches (curried functions) or that defer their result
//! (effects) expose `call` through this trait instead of `Fn`.

/// A value that can be called with an argument tuple.
///
/// The output may depend on the argument tuple's type: a curried function
/// returns the final result once enough arguments are supplied and another
/// curried function otherwise.
///
/// # Examples
///
/// ```rust
/// use algebrars::compose::curry3;
/// use algebrars::typeclass::Callable;
///
/// let add3 = curry3(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(add3.call((1, 2, 3)), 6);
/// assert_eq!(add3.call((1,)).call((2, 3)), 6);
/// ```
pub trait Callable<Arguments> {
    /// What a call with `Arguments` produces.
    type Output;

    /// Invokes `self` with `arguments`.
    fn call(&self, arguments: Arguments) -> Self::Output;
}
