use serde::{Deserialize, Serialize};

use super::schema::SchemaRef;

/// Parameter location, serialized under the `in` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    #[default]
    Path,
    Query,
    Header,
    Cookie,
}

/// A request parameter attached to an operation.
///
/// `required` and `deprecated` hold `Some(true)` or `None`, never
/// `Some(false)`: the serialized object carries the key only when the flag
/// is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestParameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub schema: SchemaRef,
}
