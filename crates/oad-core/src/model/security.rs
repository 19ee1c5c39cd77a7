use serde::{Deserialize, Serialize};

/// Security scheme data stored under `components.securitySchemes`.
///
/// The document carries these verbatim; no enforcement and no per-operation
/// wiring happens here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,

    #[serde(rename = "openIdConnect", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
}
