//! `#[derive(JsonSchema)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, MetaNameValue, PathArguments,
    Type,
};

/// Field attributes parsed from `#[schema(...)]`.
#[derive(Default)]
struct SchemaAttrs {
    rename: Option<String>,
    format: Option<String>,
    skip: bool,
}

impl SchemaAttrs {
    fn from_attributes(attrs: &[Attribute]) -> Self {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("schema") {
                continue;
            }

            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if let Ok(value) = meta.value() {
                        if let Ok(Lit::Str(s)) = value.parse::<Lit>() {
                            result.rename = Some(s.value());
                        }
                    }
                } else if meta.path.is_ident("format") {
                    if let Ok(value) = meta.value() {
                        if let Ok(Lit::Str(s)) = value.parse::<Lit>() {
                            result.format = Some(s.value());
                        }
                    }
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                }
                Ok(())
            });
        }

        result
    }
}

/// Extract doc comments from attributes.
fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            match &attr.meta {
                Meta::NameValue(MetaNameValue {
                    value:
                        Expr::Lit(ExprLit {
                            lit: Lit::Str(s), ..
                        }),
                    ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            }
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n"))
    }
}

/// Whether a type is syntactically `Option<...>`.
fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option"
                && matches!(segment.arguments, PathArguments::AngleBracketed(_));
        }
    }
    false
}

pub(crate) fn expand(input: TokenStream) -> Result<TokenStream, syn::Error> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "JsonSchema cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "JsonSchema requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "JsonSchema can only be derived for structs",
            ));
        }
    };

    let description = extract_doc_comment(&input.attrs).map(|doc| {
        quote! { object = object.with_description(#doc); }
    });

    let mut properties = Vec::new();
    for field in fields {
        let attrs = SchemaAttrs::from_attributes(&field.attrs);
        if attrs.skip {
            continue;
        }

        let field_ident = field.ident.as_ref().expect("named field");
        let property = attrs
            .rename
            .unwrap_or_else(|| field_ident.to_string());
        let ty = &field.ty;
        let required = !is_option(ty);

        let value = {
            let base = quote! { <#ty as ::oad_core::model::schema::JsonSchema>::schema()? };
            match attrs.format {
                Some(format) => quote! { #base.with_format(#format) },
                None => base,
            }
        };

        properties.push(quote! {
            object = object.property(#property, #value, #required);
        });
    }

    Ok(quote! {
        impl ::oad_core::model::schema::JsonSchema for #ident {
            fn schema() -> ::core::result::Result<
                ::oad_core::model::schema::Schema,
                ::oad_core::error::SchemaError,
            > {
                let mut object = ::oad_core::model::schema::Schema::object();
                #description
                #(#properties)*
                ::core::result::Result::Ok(object)
            }
        }
    })
}
