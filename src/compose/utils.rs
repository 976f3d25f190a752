//! Small combinators used alongside composition.

/// Returns its argument.
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A function ignoring its argument and returning a clone of `value`.
///
/// # Examples
///
/// ```rust
/// use algebrars::compose::constant;
///
/// let zero = constant(0);
/// assert_eq!([1, 2, 3].map(zero), [0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of `function`.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Composes a runtime list of same-typed functions right to left.
///
/// An empty list composes to the identity function.
///
/// # Examples
///
/// ```rust
/// use algebrars::compose::compose_all;
///
/// let steps: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|n: i32| n + 1), Box::new(|n: i32| n * 10)];
/// let run = compose_all(steps);
/// assert_eq!(run(2), 21);
/// ```
pub fn compose_all<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_returns_input() {
        assert_eq!(identity("same"), "same");
    }

    #[rstest]
    fn constant_ignores_argument() {
        let always = constant(String::from("fixed"));
        assert_eq!(always(1), "fixed");
        assert_eq!(always(2), "fixed");
    }

    #[rstest]
    #[case(10, 3, 1)]
    #[case(3, 10, 3)]
    fn flip_swaps_arguments(#[case] first: i32, #[case] second: i32, #[case] expected: i32) {
        let remainder = |dividend: i32, divisor: i32| dividend % divisor;
        assert_eq!(flip(remainder)(second, first), expected);
    }

    #[rstest]
    fn flip_twice_restores_order() {
        let minus = |a: i32, b: i32| a - b;
        assert_eq!(flip(flip(minus))(5, 2), minus(5, 2));
    }

    #[rstest]
    fn compose_all_of_nothing_is_identity() {
        let nothing: Vec<fn(u8) -> u8> = Vec::new();
        assert_eq!(compose_all(nothing)(9), 9);
    }

    #[rstest]
    fn compose_all_runs_last_function_first() {
        let steps: Vec<Box<dyn Fn(String) -> String>> = vec![
            Box::new(|text: String| format!("<{text}>")),
            Box::new(|text: String| text.to_uppercase()),
        ];
        assert_eq!(compose_all(steps)(String::from("a")), "<A>");
    }
}
