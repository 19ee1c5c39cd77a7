use crate::error::RenderError;
use crate::model::spec::OpenApiDocument;

/// Render the document as compact JSON.
///
/// Serde attributes on the model enforce the omission discipline: optional
/// fields that were never set are left out entirely, not emitted as `null`.
pub fn to_json(doc: &OpenApiDocument) -> Result<String, RenderError> {
    Ok(serde_json::to_string(doc)?)
}

/// Render the document as pretty-printed JSON.
pub fn to_json_pretty(doc: &OpenApiDocument) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Render the document as YAML.
pub fn to_yaml(doc: &OpenApiDocument) -> Result<String, RenderError> {
    Ok(serde_yaml_ng::to_string(doc)?)
}
