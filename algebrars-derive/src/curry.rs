//! Implementation of `curry!`.
//!
//! Accepted forms:
//!
//! 1. `curry!(|a, b, ...| body)`: arity is the number of closure parameters
//! 2. `curry!(path, N)`: arity given as an integer literal
//!
//! Both expand to a call of the matching `::algebrars::compose::curryN`
//! constructor.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Lit, Token};

const MINIMUM_ARITY: usize = 2;
const MAXIMUM_ARITY: usize = 6;

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = parse_curry_input(input.into())
        .and_then(|(function, arity, span)| expand(&function, arity, span))
        .unwrap_or_else(|error| error.to_compile_error());

    TokenStream::from(expanded)
}

fn parse_curry_input(input: TokenStream2) -> syn::Result<(Expr, usize, Span)> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(Expr::Closure(closure)), None, None) => {
            let arity = closure.inputs.len();
            let span = closure.span();
            Ok((Expr::Closure(closure), arity, span))
        }
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! with a function path needs an arity: curry!(function, 2)",
        )),
        (Some(function @ Expr::Path(_)), Some(arity), None) => {
            let span = arity.span();
            Ok((function, parse_arity(&arity)?, span))
        }
        (Some(other), Some(_), None) => Err(syn::Error::new(
            other.span(),
            "curry! expected a function name or path before the arity",
        )),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! takes a closure, or a function path and an arity",
        )),
    }
}

fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal),
            ..
        }) => literal.base10_parse::<usize>(),
        other => Err(syn::Error::new(
            other.span(),
            "curry! expected an integer literal for the arity",
        )),
    }
}

fn expand(function: &Expr, arity: usize, span: Span) -> syn::Result<TokenStream2> {
    if !(MINIMUM_ARITY..=MAXIMUM_ARITY).contains(&arity) {
        return Err(syn::Error::new(
            span,
            format!("curry! supports arities {MINIMUM_ARITY} to {MAXIMUM_ARITY}, found {arity}"),
        ));
    }
    let constructor = format_ident!("curry{}", arity);
    Ok(quote! {
        ::algebrars::compose::#constructor(#function)
    })
}
