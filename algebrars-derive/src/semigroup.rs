//! Implementation of `#[derive(Semigroup)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Index, parse_macro_input, parse_quote};

pub fn derive_semigroup_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(input))
}

fn expand(mut input: DeriveInput) -> TokenStream2 {
    let body = match &input.data {
        Data::Struct(data) => combine_body(&data.fields),
        Data::Enum(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                "Semigroup can only be derived for structs; implement it by hand for enums.",
            )
            .to_compile_error();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Semigroup cannot be derived for unions.")
                .to_compile_error();
        }
    };

    for parameter in &mut input.generics.params {
        if let GenericParam::Type(type_parameter) = parameter {
            type_parameter
                .bounds
                .push(parse_quote!(::algebrars::typeclass::Semigroup));
        }
    }

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::algebrars::typeclass::Semigroup
            for #name #type_generics #where_clause
        {
            fn combine(self, other: Self) -> Self {
                #body
            }
        }
    }
}

fn combine_body(fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named) => {
            let names: Vec<_> = named
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            quote! {
                Self {
                    #(
                        #names: ::algebrars::typeclass::Semigroup::combine(
                            self.#names,
                            other.#names,
                        ),
                    )*
                }
            }
        }
        Fields::Unnamed(unnamed) => {
            let indices = (0..unnamed.unnamed.len()).map(Index::from);
            let combined = indices.map(|index| {
                quote! { ::algebrars::typeclass::Semigroup::combine(self.#index, other.#index) }
            });
            quote! { Self(#(#combined),*) }
        }
        Fields::Unit => quote! {
            let _ = other;
            self
        },
    }
}
