use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A JSON Schema fragment, as stored under `components.schemas`.
///
/// Only the subset produced by [`JsonSchema`] implementations is modeled;
/// unused keywords are simply never set and never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,
}

impl Schema {
    fn typed(schema_type: &str, format: Option<&str>) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            format: format.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::typed("string", None)
    }

    pub fn integer(format: &str) -> Self {
        Self::typed("integer", Some(format))
    }

    pub fn number(format: &str) -> Self {
        Self::typed("number", Some(format))
    }

    pub fn boolean() -> Self {
        Self::typed("boolean", None)
    }

    /// Empty object schema; fill it with [`Schema::property`].
    pub fn object() -> Self {
        Self::typed("object", None)
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::typed("array", None)
        }
    }

    /// Reference to a named component schema.
    pub fn reference(name: &str) -> Self {
        Self {
            ref_path: Some(format!("#/components/schemas/{name}")),
            ..Self::default()
        }
    }

    /// Add a property; `required` also lists the name under `required`.
    #[must_use]
    pub fn property(mut self, name: &str, schema: Schema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = Some(true);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn with_additional_properties(mut self, schema: Schema) -> Self {
        self.additional_properties = Some(Box::new(schema));
        self
    }
}

/// Inline item of an array parameter schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Pointer-like schema used on endpoints: a component reference, an array of
/// an inline primitive, or an inline primitive. The three shapes are mutually
/// exclusive per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Array {
        #[serde(rename = "type")]
        schema_type: String,
        item: Item,
    },
    Inline {
        #[serde(rename = "type")]
        schema_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
}

impl SchemaRef {
    /// Reference to a named component schema.
    pub fn component(name: &str) -> Self {
        SchemaRef::Ref {
            ref_path: format!("#/components/schemas/{name}"),
        }
    }

    pub fn inline(schema_type: impl Into<String>, format: Option<String>) -> Self {
        SchemaRef::Inline {
            schema_type: schema_type.into(),
            format,
        }
    }

    pub fn array_of(schema_type: impl Into<String>, format: Option<String>) -> Self {
        SchemaRef::Array {
            schema_type: "array".to_string(),
            item: Item {
                schema_type: schema_type.into(),
                format,
            },
        }
    }
}

/// Declarative JSON Schema source for the model types referenced from
/// endpoint metadata.
///
/// Implement by hand for special shapes, or use `#[derive(JsonSchema)]` from
/// `oad-macros`. Both ways the result is pure: the same type always yields
/// the same fragment and name.
pub trait JsonSchema {
    /// Produce the JSON Schema fragment for this type.
    ///
    /// # Errors
    ///
    /// [`SchemaError`] when the type cannot be expressed as a fragment; the
    /// failure surfaces unchanged from
    /// [`SchemaRegistry::register`](crate::registry::SchemaRegistry::register).
    fn schema() -> Result<Schema, SchemaError>;

    /// Name for the `#/components/schemas/` entry.
    ///
    /// Defaults to the fully qualified type path, so same-named types in
    /// different modules do not collide.
    fn schema_name() -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl JsonSchema for String {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::string())
    }
}

impl JsonSchema for i32 {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::integer("int32"))
    }
}

impl JsonSchema for i64 {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::integer("int64"))
    }
}

impl JsonSchema for u32 {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::integer("int32"))
    }
}

impl JsonSchema for u64 {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::integer("int64"))
    }
}

impl JsonSchema for f32 {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::number("float"))
    }
}

impl JsonSchema for f64 {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::number("double"))
    }
}

impl JsonSchema for bool {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::boolean())
    }
}

impl<T: JsonSchema> JsonSchema for Option<T> {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(T::schema()?.nullable())
    }
}

impl<T: JsonSchema> JsonSchema for Vec<T> {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::array(T::schema()?))
    }
}

impl<T: JsonSchema> JsonSchema for HashMap<String, T> {
    fn schema() -> Result<Schema, SchemaError> {
        Ok(Schema::object().with_additional_properties(T::schema()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_fragments() {
        let s = String::schema().unwrap();
        assert_eq!(s.schema_type.as_deref(), Some("string"));
        assert_eq!(s.format, None);

        let i = i64::schema().unwrap();
        assert_eq!(i.schema_type.as_deref(), Some("integer"));
        assert_eq!(i.format.as_deref(), Some("int64"));
    }

    #[test]
    fn option_marks_nullable() {
        let s = Option::<String>::schema().unwrap();
        assert_eq!(s.schema_type.as_deref(), Some("string"));
        assert_eq!(s.nullable, Some(true));
    }

    #[test]
    fn vec_wraps_items() {
        let s = Vec::<i32>::schema().unwrap();
        assert_eq!(s.schema_type.as_deref(), Some("array"));
        let items = s.items.expect("should have items");
        assert_eq!(items.schema_type.as_deref(), Some("integer"));
    }

    #[test]
    fn map_uses_additional_properties() {
        let s = HashMap::<String, bool>::schema().unwrap();
        assert_eq!(s.schema_type.as_deref(), Some("object"));
        let extra = s.additional_properties.expect("should have additionalProperties");
        assert_eq!(extra.schema_type.as_deref(), Some("boolean"));
    }

    #[test]
    fn schema_ref_serialized_shapes() {
        let json = serde_json::to_value(SchemaRef::component("demo.Model")).unwrap();
        assert_eq!(json["$ref"], "#/components/schemas/demo.Model");

        let json = serde_json::to_value(SchemaRef::inline("string", None)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "string"}));

        let json =
            serde_json::to_value(SchemaRef::array_of("string", Some("date-time".into()))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "array", "item": {"type": "string", "format": "date-time"}})
        );
    }
}
