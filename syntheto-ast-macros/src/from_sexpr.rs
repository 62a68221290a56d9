use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, DataEnum, DataStruct, DeriveInput};

use crate::common::{
    field_keyword, parse_container_attributes, parse_field_attributes, parse_variants,
    VariantKind,
};

pub fn derive_from_sexpr_impl(derive_input: DeriveInput) -> syn::Result<TokenStream> {
    if !derive_input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &derive_input.generics,
            "Can not derive FromSexpr for generic types.",
        ));
    }

    match &derive_input.data {
        syn::Data::Struct(data_struct) => derive_from_sexpr_struct(&derive_input, data_struct),
        syn::Data::Enum(data_enum) => derive_from_sexpr_enum(&derive_input, data_enum),
        syn::Data::Union(_) => Err(syn::Error::new(
            derive_input.span(),
            "Can not derive FromSexpr for unions.",
        )),
    }
}

fn derive_from_sexpr_struct(
    derive_input: &DeriveInput,
    data_struct: &DataStruct,
) -> syn::Result<TokenStream> {
    let struct_ident = &derive_input.ident;

    // Reads each field in declaration order
    let mut code_fields = Vec::new();

    let mut constr_fields = Vec::new();

    for field in &data_struct.fields {
        let Some(field_ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "Fields must be named to derive FromSexpr.",
            ));
        };

        let field_data = parse_field_attributes(&field.attrs)?;
        let keyword = field_keyword(field_ident, &field_data);

        let field_ident_var = syn::Ident::new(
            &format!("var_{}", field_ident.to_string().trim_start_matches("r#")),
            field_ident.span(),
        );

        code_fields.push(quote! {
            let #field_ident_var = form.field(#keyword)?;
        });

        constr_fields.push(quote! {
            #field_ident: #field_ident_var
        });
    }

    let arity = code_fields.len();

    Ok(quote! {
        #[automatically_derived]
        impl ::syntheto_ast::protocol::FromSexpr for #struct_ident {
            fn from_sexpr(
                value: &::syntheto_ast::sexpr::Value,
            ) -> ::std::result::Result<Self, ::syntheto_ast::DecodeError> {
                #[allow(unused_mut)]
                let mut form = ::syntheto_ast::protocol::FormReader::open(
                    value,
                    <Self as ::syntheto_ast::protocol::Maker>::MAKER,
                    #arity,
                )?;
                #(#code_fields)*
                form.finish()?;
                Ok(Self {
                    #(#constr_fields),*
                })
            }
        }
    })
}

fn derive_from_sexpr_enum(
    derive_input: &DeriveInput,
    data_enum: &DataEnum,
) -> syn::Result<TokenStream> {
    let enum_ident = &derive_input.ident;
    let container = parse_container_attributes(&derive_input.attrs)?;

    let Some(family) = container.family else {
        return Err(syn::Error::new_spanned(
            enum_ident,
            "Missing #[sexpr(family = \"...\")] attribute.",
        ));
    };

    let variants = parse_variants(data_enum)?;
    let mut code_decoders = Vec::new();

    for variant in &variants {
        let variant_ident = variant.ident;
        match &variant.kind {
            VariantKind::Unit { maker } => {
                code_decoders.push(quote! {
                    (
                        #maker,
                        (|value: &::syntheto_ast::sexpr::Value| -> ::std::result::Result<Self, ::syntheto_ast::DecodeError> {
                            ::syntheto_ast::protocol::FormReader::open(value, #maker, 0)?.finish()?;
                            Ok(Self::#variant_ident)
                        }) as ::syntheto_ast::protocol::Decoder<Self>,
                    )
                });
            }
            VariantKind::Wrapper { ty } => {
                code_decoders.push(quote! {
                    (
                        <#ty as ::syntheto_ast::protocol::Maker>::MAKER,
                        (|value: &::syntheto_ast::sexpr::Value| -> ::std::result::Result<Self, ::syntheto_ast::DecodeError> {
                            <#ty as ::syntheto_ast::protocol::FromSexpr>::from_sexpr(value).map(Self::#variant_ident)
                        }) as ::syntheto_ast::protocol::Decoder<Self>,
                    )
                });
            }
        }
    }

    Ok(quote! {
        #[automatically_derived]
        impl ::syntheto_ast::protocol::FromSexpr for #enum_ident {
            fn from_sexpr(
                value: &::syntheto_ast::sexpr::Value,
            ) -> ::std::result::Result<Self, ::syntheto_ast::DecodeError> {
                ::syntheto_ast::protocol::decode_family(value)
            }
        }

        #[automatically_derived]
        impl ::syntheto_ast::protocol::Family for #enum_ident {
            const NAME: &'static str = #family;

            fn decoders() -> ::std::vec::Vec<(&'static str, ::syntheto_ast::protocol::Decoder<Self>)> {
                ::std::vec![
                    #(#code_decoders),*
                ]
            }
        }
    })
}
