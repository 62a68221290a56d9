//! Procedural macros that implement the maker-form encoding of Syntheto
//! abstract syntax. See the `syntheto-ast` crate for the traits involved.
//!
//! Structs are encoded as `(SYNTHETO::<maker> :FIELD value ...)` with the
//! fields in declaration order. The maker is given with
//! `#[sexpr(maker = "MAKE-...")]`; a field keyword defaults to the field name
//! in upper case with `_` replaced by `-` and can be overridden with
//! `#[sexpr(rename = "...")]`.
//!
//! Enums form a family, named with `#[sexpr(family = "...")]`. Each variant
//! either wraps a single struct that derives the traits itself, or is a unit
//! variant with its own `#[sexpr(maker = "...")]` and no fields.
use syn::{parse_macro_input, DeriveInput};

pub(crate) mod common;
mod from_sexpr;
mod to_sexpr;

/// Derive the `FromSexpr` trait, and `Family` for enums.
#[proc_macro_derive(FromSexpr, attributes(sexpr))]
pub fn derive_from_sexpr(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    from_sexpr::derive_from_sexpr_impl(derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive the `ToSexpr` trait together with `Maker` for structs and `Display`.
#[proc_macro_derive(ToSexpr, attributes(sexpr))]
pub fn derive_to_sexpr(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    to_sexpr::derive_to_sexpr_impl(derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
