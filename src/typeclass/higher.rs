//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` as a type constructor directly.
//! [`TypeConstructor`] records the applied type (`Inner`) and how to re-apply
//! the constructor to another type (`WithType<B>`), which is enough to state
//! `Functor`, `Applicative` and `Monad` once for every container.

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
///
/// # Examples
///
/// ```rust
/// use algebrars::container::Optional;
/// use algebrars::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Optional<i32>>();
///
/// type Retyped = <Optional<i32> as TypeConstructor>::WithType<String>;
/// let absent: Retyped = Optional::none();
/// assert!(absent.is_absent());
/// ```
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Boxed<A>(A);

    impl<A> TypeConstructor for Boxed<A> {
        type Inner = A;
        type WithType<B> = Boxed<B>;
    }

    #[test]
    fn inner_type_is_exposed() {
        fn assert_inner<T: TypeConstructor<Inner = u8>>() {}
        assert_inner::<Boxed<u8>>();
    }

    #[test]
    fn with_type_can_be_chained() {
        type Step1 = <Boxed<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_inner<T: TypeConstructor<Inner = bool>>() {}
        assert_inner::<Step2>();

        let value: Step2 = Boxed(true);
        assert!(value.0);
    }
}
