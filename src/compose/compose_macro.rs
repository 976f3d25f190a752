//! Right-to-left function composition.

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// With no functions the result is [`identity`](crate::compose::identity).
/// Every function takes one argument; use a curried function or a closure to
/// feed multi-argument functions.
///
/// # Examples
///
/// ```rust
/// use algebrars::compose;
///
/// let add_one = |n: i32| n + 1;
/// let label = |n: i32| format!("value: {n}");
/// let shout = |text: String| text.to_uppercase();
///
/// let describe = compose!(shout, label, add_one);
/// assert_eq!(describe(5), "VALUE: 6");
///
/// let unchanged = compose!();
/// assert_eq!(unchanged("same"), "same");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}
