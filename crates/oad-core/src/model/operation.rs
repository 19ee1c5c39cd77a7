use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::is_false;
use super::parameter::RequestParameter;
use super::request_body::RequestBody;
use super::response::Response;
use super::spec::ExternalDocumentation;

/// One documented operation: a single HTTP method on a single path.
///
/// Populated exclusively through
/// [`EndpointBuilder`](crate::fluent::EndpointBuilder); every optional field
/// stays off the wire until a fluent call sets it. `tags` distinguishes
/// "never set" from "set to something" so that the first non-empty tag set
/// sticks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,

    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<RequestParameter>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, Response>,
}
