use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::SchemaRef;

/// A request body definition.
///
/// Always replaced wholesale by
/// [`request_model`](crate::fluent::EndpointBuilder::request_model); content
/// types from earlier calls are not merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content: IndexMap<String, MediaType>,
}

/// The schema carried by one content type of a request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: SchemaRef,
}
