use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::Schema;
use super::security::SecurityScheme;

/// Components object holding reusable named definitions.
///
/// `schemas` is the assembly-time snapshot of the
/// [`SchemaRegistry`](crate::registry::SchemaRegistry); `security_schemes`
/// is stored data only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,

    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}
