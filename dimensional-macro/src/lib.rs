//! Procedural macros used by the [`dimensional`](https://docs.rs/dimensional) crate.
//!
//! Nothing in here is meant to be called directly: the generated items refer to the type-level
//! integers of `dimensional::integer` by their bare names, so the macros only make sense when
//! invoked from within that module.

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, LitInt};

/// Generate the conversions between `Number<N>` and the type-level integer `Z`/`P<...>`/`M<...>`
/// for every `N` in `-bound..=bound`.
///
/// Expands to `impl ToInteger for Number<N>` and `impl ToConstant for <integer>` pairs. The bound
/// must fit in an `i8` and be non-negative.
#[proc_macro]
pub fn generate_integer_conversion_impls(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitInt);
    let bound = match literal.base10_parse::<i8>() {
        Ok(bound) if bound >= 0 => bound,
        Ok(_) => {
            return syn::Error::new(literal.span(), "the bound must not be negative")
                .to_compile_error()
                .into()
        }
        Err(e) => return e.to_compile_error().into(),
    };

    let mut impls = TokenStream2::new();
    impls.extend(conversion_impl(0, quote!(Z)));

    let mut positive = quote!(Z);
    let mut negative = quote!(Z);
    for n in 1..=bound {
        positive = quote!(P<#positive>);
        negative = quote!(M<#negative>);
        impls.extend(conversion_impl(n, positive.clone()));
        impls.extend(conversion_impl(-n, negative.clone()));
    }

    impls.into()
}

/// The pair of impls connecting the constant `n` to the integer type `integer`.
fn conversion_impl(n: i8, integer: TokenStream2) -> TokenStream2 {
    let magnitude = Literal::i8_unsuffixed(n.abs());
    let constant = if n < 0 {
        quote!({ -#magnitude })
    } else {
        quote!(#magnitude)
    };
    quote! {
        impl ToInteger for Number<#constant> {
            type AsInteger = #integer;
        }

        impl ToConstant for #integer {
            type AsConstant = Number<#constant>;
        }
    }
}
