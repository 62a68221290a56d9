use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DataEnum, GenericParam};
use syn::{spanned::Spanned, DataStruct, DeriveInput};

use crate::common::{
    field_keyword, parse_container_attributes, parse_field_attributes, parse_variants,
    VariantKind,
};

pub fn derive_to_sexpr_impl(derive_input: DeriveInput) -> syn::Result<TokenStream> {
    match &derive_input.data {
        syn::Data::Struct(data_struct) => derive_to_sexpr_struct(&derive_input, data_struct),
        syn::Data::Enum(data_enum) => derive_to_sexpr_enum(&derive_input, data_enum),
        syn::Data::Union(_) => Err(syn::Error::new(
            derive_input.span(),
            "Can not derive ToSexpr for unions.",
        )),
    }
}

fn derive_to_sexpr_struct(
    derive_input: &DeriveInput,
    data_struct: &DataStruct,
) -> syn::Result<TokenStream> {
    let struct_ident = &derive_input.ident;
    let container = parse_container_attributes(&derive_input.attrs)?;

    let Some(maker) = container.maker else {
        return Err(syn::Error::new_spanned(
            struct_ident,
            "Missing #[sexpr(maker = \"...\")] attribute.",
        ));
    };

    let mut code_fields = Vec::new();

    for field in &data_struct.fields {
        let Some(field_ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "Fields must be named to derive ToSexpr.",
            ));
        };

        let field_data = parse_field_attributes(&field.attrs)?;
        let keyword = field_keyword(field_ident, &field_data);

        code_fields.push(quote! {
            .field(#keyword, &self.#field_ident)
        });
    }

    let generics = bounded_generics(derive_input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::syntheto_ast::protocol::Maker for #struct_ident #ty_generics #where_clause {
            const MAKER: &'static str = #maker;
        }

        #[automatically_derived]
        impl #impl_generics ::syntheto_ast::protocol::ToSexpr for #struct_ident #ty_generics #where_clause {
            fn to_sexpr(&self) -> ::syntheto_ast::sexpr::Value {
                ::syntheto_ast::protocol::FormWriter::new(#maker)
                    #(#code_fields)*
                    .finish()
            }
        }

        impl #impl_generics #struct_ident #ty_generics #where_clause {
            /// Name of the maker function that constructs this node.
            pub fn maker(&self) -> &'static str {
                #maker
            }
        }

        #[automatically_derived]
        impl #impl_generics ::std::fmt::Display for #struct_ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&::syntheto_ast::to_string(self))
            }
        }
    })
}

fn derive_to_sexpr_enum(
    derive_input: &DeriveInput,
    data_enum: &DataEnum,
) -> syn::Result<TokenStream> {
    let enum_ident = &derive_input.ident;
    let variants = parse_variants(data_enum)?;

    let mut code_encode = Vec::new();
    let mut code_maker = Vec::new();

    for variant in &variants {
        let variant_ident = variant.ident;
        match &variant.kind {
            VariantKind::Unit { maker } => {
                code_encode.push(quote! {
                    Self::#variant_ident => ::syntheto_ast::protocol::FormWriter::new(#maker).finish(),
                });
                code_maker.push(quote! {
                    Self::#variant_ident => #maker,
                });
            }
            VariantKind::Wrapper { ty } => {
                code_encode.push(quote! {
                    Self::#variant_ident(inner) => ::syntheto_ast::protocol::ToSexpr::to_sexpr(inner),
                });
                code_maker.push(quote! {
                    Self::#variant_ident(_) => <#ty as ::syntheto_ast::protocol::Maker>::MAKER,
                });
            }
        }
    }

    let generics = bounded_generics(derive_input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::syntheto_ast::protocol::ToSexpr for #enum_ident #ty_generics #where_clause {
            fn to_sexpr(&self) -> ::syntheto_ast::sexpr::Value {
                match self {
                    #(#code_encode)*
                }
            }
        }

        impl #impl_generics #enum_ident #ty_generics #where_clause {
            /// Name of the maker function that constructs this node.
            pub fn maker(&self) -> &'static str {
                match self {
                    #(#code_maker)*
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::std::fmt::Display for #enum_ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&::syntheto_ast::to_string(self))
            }
        }
    })
}

/// Add a `ToSexpr` bound to every generic type argument.
fn bounded_generics(derive_input: &DeriveInput) -> syn::Generics {
    let mut modified_generics = derive_input.generics.clone();
    let where_clause = modified_generics.make_where_clause();

    for param in &derive_input.generics.params {
        if let GenericParam::Type(param) = param {
            let ident = &param.ident;
            where_clause
                .predicates
                .push(parse_quote!(#ident: ::syntheto_ast::protocol::ToSexpr));
        }
    }

    modified_generics
}
