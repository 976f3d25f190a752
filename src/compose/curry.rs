//! Curried functions with batch application.
//!
//! [`Curried`] collects arguments across calls. Each call passes a tuple of
//! one or more of the next arguments; once all of them are present the
//! wrapped function runs, otherwise a new `Curried` holding the longer prefix
//! is returned. Any split works:
//!
//! ```rust
//! use algebrars::compose::curry3;
//! use algebrars::typeclass::Callable;
//!
//! let volume = curry3(|w: u32, h: u32, d: u32| w * h * d);
//!
//! assert_eq!(volume.call((2, 3, 4)), 24);
//! assert_eq!(volume.call((2,)).call((3,)).call((4,)), 24);
//! assert_eq!(volume.call((2, 3)).call((4,)), 24);
//! assert_eq!(volume.call((2,)).call((3, 4)), 24);
//! ```
//!
//! A partial application can be reused; its held arguments are cloned for
//! each call. Passing more arguments than the function takes does not
//! compile.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::Callable;

/// A function of the argument tuple `Signature` that has received `Held`.
pub struct Curried<F, Signature, Held> {
    function: Arc<F>,
    held: Held,
    signature: PhantomData<fn() -> Signature>,
}

impl<F, Signature, Held: Clone> Clone for Curried<F, Signature, Held> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            held: self.held.clone(),
            signature: PhantomData,
        }
    }
}

impl<F, Signature, Held: fmt::Debug> fmt::Debug for Curried<F, Signature, Held> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("held", &self.held)
            .finish_non_exhaustive()
    }
}

impl<F, Signature, Held> Curried<F, Signature, Held> {
    /// The arguments supplied so far.
    pub const fn held(&self) -> &Held {
        &self.held
    }
}

macro_rules! curry_constructors {
    ($($name:ident => ($($A:ident),+);)+) => {
        $(
            #[doc = concat!("Curries a function of ", stringify!($($A),+), ".")]
            pub fn $name<F, R, $($A),+>(function: F) -> Curried<F, ($($A,)+), ()>
            where
                F: Fn($($A),+) -> R,
            {
                Curried {
                    function: Arc::new(function),
                    held: (),
                    signature: PhantomData,
                }
            }
        )+
    };
}

curry_constructors! {
    curry2 => (A, B);
    curry3 => (A, B, C);
    curry4 => (A, B, C, D);
    curry5 => (A, B, C, D, E);
    curry6 => (A, B, C, D, E, G);
}

// Generates one `Callable` impl per (held prefix, next batch) split.
macro_rules! callable_splits {
    ($($a:ident : $A:ident),+) => {
        callable_splits!(@held [] [$($a: $A),+] ; [$($A),+]);
    };

    (@held [$($h:ident : $H:ident),*] [] ; $signature:tt) => {};
    (@held [$($h:ident : $H:ident),*] [$next:ident : $Next:ident $(, $r:ident : $R:ident)*] ; $signature:tt) => {
        callable_splits!(@batch $signature [$($h: $H),*] [] [$next: $Next $(, $r: $R)*]);
        callable_splits!(@held [$($h: $H,)* $next: $Next] [$($r: $R),*] ; $signature);
    };

    (@batch $signature:tt [$($h:ident : $H:ident),*] [$($b:ident : $B:ident),*] []) => {};
    (@batch $signature:tt [$($h:ident : $H:ident),*] [$($b:ident : $B:ident),*] [$next:ident : $Next:ident $(, $r:ident : $R:ident)*]) => {
        callable_splits!(@emit $signature [$($h: $H),*] [$($b: $B,)* $next: $Next] [$($r: $R),*]);
        callable_splits!(@batch $signature [$($h: $H),*] [$($b: $B,)* $next: $Next] [$($r: $R),*]);
    };

    (@emit [$($S:ident),+] [$($h:ident : $H:ident),*] [$($b:ident : $B:ident),+] []) => {
        impl<F, Out, $($S),+> Callable<($($B,)+)> for Curried<F, ($($S,)+), ($($H,)*)>
        where
            F: Fn($($S),+) -> Out,
            $($H: Clone,)*
        {
            type Output = Out;

            #[allow(clippy::let_unit_value, clippy::clone_on_copy, clippy::unused_unit)]
            fn call(&self, ($($b,)+): ($($B,)+)) -> Out {
                let ($($h,)*) = self.held.clone();
                (self.function)($($h,)* $($b),+)
            }
        }
    };
    (@emit [$($S:ident),+] [$($h:ident : $H:ident),*] [$($b:ident : $B:ident),+] [$($r:ident : $R:ident),+]) => {
        impl<F, Out, $($S),+> Callable<($($B,)+)> for Curried<F, ($($S,)+), ($($H,)*)>
        where
            F: Fn($($S),+) -> Out,
            $($H: Clone,)*
        {
            type Output = Curried<F, ($($S,)+), ($($H,)* $($B,)+)>;

            #[allow(clippy::let_unit_value, clippy::clone_on_copy, clippy::unused_unit)]
            fn call(&self, ($($b,)+): ($($B,)+)) -> Self::Output {
                let ($($h,)*) = self.held.clone();
                Curried {
                    function: Arc::clone(&self.function),
                    held: ($($h,)* $($b,)+),
                    signature: PhantomData,
                }
            }
        }
    };
}

callable_splits!(a: A, b: B);
callable_splits!(a: A, b: B, c: C);
callable_splits!(a: A, b: B, c: C, d: D);
callable_splits!(a: A, b: B, c: C, d: D, e: E);
callable_splits!(a: A, b: B, c: C, d: D, e: E, g: G);
