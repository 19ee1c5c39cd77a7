use serde::{Deserialize, Serialize};

use super::schema::SchemaRef;

/// A response under one status code.
///
/// `schema` is absent for responses without a body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}
