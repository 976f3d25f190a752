//! Left-to-right application.

/// Threads a value through functions left to right:
/// `pipe!(x, f, g) == g(f(x))`.
///
/// # Examples
///
/// ```rust
/// use algebrars::pipe;
///
/// let trimmed_len = pipe!("  padded  ", str::trim, str::len);
/// assert_eq!(trimmed_len, 6);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}
