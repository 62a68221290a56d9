use quote::ToTokens;
use syn::{Attribute, DataEnum, Fields, Ident, LitStr, Type};

/// `sexpr` attributes on a struct, an enum or an enum variant.
#[derive(Default)]
pub struct ContainerData {
    pub maker: Option<String>,
    pub family: Option<String>,
}

/// `sexpr` attributes on a field.
#[derive(Default)]
pub struct FieldData {
    pub rename: Option<String>,
}

/// Parse the `sexpr` attributes on a struct, enum or variant.
pub fn parse_container_attributes(attrs: &[Attribute]) -> syn::Result<ContainerData> {
    let mut data = ContainerData::default();

    for attr in attrs {
        if !attr.path().is_ident("sexpr") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let path = &meta.path;
            if path.is_ident("maker") {
                let name: LitStr = meta.value()?.parse()?;
                data.maker = Some(name.value());
                Ok(())
            } else if path.is_ident("family") {
                let name: LitStr = meta.value()?.parse()?;
                data.family = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("unrecognized sexpr attribute"))
            }
        })?;
    }

    Ok(data)
}

/// Parse the `sexpr` attributes on a field.
pub fn parse_field_attributes(attrs: &[Attribute]) -> syn::Result<FieldData> {
    let mut data = FieldData::default();

    for attr in attrs {
        if !attr.path().is_ident("sexpr") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                data.rename = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("unrecognized sexpr attribute"))
            }
        })?;
    }

    Ok(data)
}

/// The keyword naming a field: `left_operand` becomes `LEFT-OPERAND`.
pub fn field_keyword(ident: &Ident, data: &FieldData) -> String {
    if let Some(rename) = &data.rename {
        return rename.clone();
    }

    let name = ident.to_token_stream().to_string();
    name.trim_start_matches("r#").to_uppercase().replace('_', "-")
}

/// How a variant of a family enum is encoded.
pub enum VariantKind<'a> {
    /// A unit variant with its own maker and no fields.
    Unit { maker: String },
    /// A variant wrapping a single node type that carries its own maker.
    Wrapper { ty: &'a Type },
}

pub struct VariantData<'a> {
    pub ident: &'a Ident,
    pub kind: VariantKind<'a>,
}

/// Classify the variants of a family enum.
pub fn parse_variants(data_enum: &DataEnum) -> syn::Result<Vec<VariantData<'_>>> {
    let mut variants = Vec::new();

    for variant in &data_enum.variants {
        let attributes = parse_container_attributes(&variant.attrs)?;

        let kind = match (&variant.fields, attributes.maker) {
            (Fields::Unit, Some(maker)) => VariantKind::Unit { maker },
            (Fields::Unit, None) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Unit variants need a #[sexpr(maker = \"...\")] attribute.",
                ))
            }
            (Fields::Unnamed(fields), None) if fields.unnamed.len() == 1 => VariantKind::Wrapper {
                ty: &fields.unnamed[0].ty,
            },
            (Fields::Unnamed(_), Some(_)) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Wrapper variants take the maker of the wrapped type.",
                ))
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Variants must be unit variants or wrap exactly one type.",
                ))
            }
        };

        variants.push(VariantData {
            ident: &variant.ident,
            kind,
        });
    }

    Ok(variants)
}
