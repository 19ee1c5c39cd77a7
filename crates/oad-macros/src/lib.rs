//! Procedural macros for `oad-core`.

use proc_macro::TokenStream;

mod json_schema;

/// Derive `JsonSchema` for a struct with named fields.
///
/// Non-`Option` fields are listed as required; `Option` fields are optional
/// and nullable. The struct's doc comment becomes the object schema's
/// description. Field behavior is tuned with `#[schema(...)]`:
///
/// - `#[schema(rename = "...")]` — property name on the wire
/// - `#[schema(format = "...")]` — override the schema format
/// - `#[schema(skip)]` — leave the field out of the schema
#[proc_macro_derive(JsonSchema, attributes(schema))]
pub fn derive_json_schema(input: TokenStream) -> TokenStream {
    json_schema::expand(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
