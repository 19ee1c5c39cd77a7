use indexmap::IndexMap;

use crate::error::SchemaError;
use crate::model::operation::Endpoint;
use crate::model::parameter::{ParameterLocation, RequestParameter};
use crate::model::request_body::{MediaType, RequestBody};
use crate::model::response::Response;
use crate::model::schema::{JsonSchema, SchemaRef};
use crate::model::spec::ExternalDocumentation;
use crate::registry::SchemaRegistry;
use crate::type_mapper::resolve_inline_schema;

/// Inputs for [`EndpointBuilder::request_parameter`].
///
/// Unset fields fall back to the documented defaults via struct update:
///
/// ```
/// # use oad_core::fluent::ParameterSpec;
/// let count = ParameterSpec {
///     name: "count",
///     kind: "integer",
///     ..ParameterSpec::default()
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParameterSpec<'a> {
    pub name: &'a str,
    /// Type token resolved through the inline mapper (default `"string"`).
    pub kind: &'a str,
    /// Explicit format, overriding the token-derived one.
    pub format: Option<&'a str>,
    pub required: bool,
    pub description: Option<&'a str>,
    pub location: ParameterLocation,
    pub deprecated: bool,
    pub is_array: bool,
}

impl Default for ParameterSpec<'_> {
    fn default() -> Self {
        Self {
            name: "",
            kind: "string",
            format: None,
            required: true,
            description: None,
            location: ParameterLocation::Path,
            deprecated: false,
            is_array: false,
        }
    }
}

/// Inputs for [`EndpointBuilder::request_model`].
#[derive(Debug, Clone, Copy)]
pub struct BodySpec<'a> {
    pub content_type: &'a str,
    pub description: Option<&'a str>,
    pub required: bool,
}

impl Default for BodySpec<'_> {
    fn default() -> Self {
        Self {
            content_type: "application/json",
            description: None,
            required: true,
        }
    }
}

/// Fluent mutator over one [`Endpoint`] record.
///
/// Methods chain through `&mut Self`; the ones that resolve a model type go
/// through the shared [`SchemaRegistry`] and are fallible, so chains thread
/// `?` at those points. Later calls for the same slot (a status code, the
/// request body) overwrite earlier ones.
pub struct EndpointBuilder<'r> {
    endpoint: Endpoint,
    registry: &'r mut SchemaRegistry,
}

impl<'r> EndpointBuilder<'r> {
    pub fn new(registry: &'r mut SchemaRegistry) -> Self {
        Self {
            endpoint: Endpoint::default(),
            registry,
        }
    }

    /// Attach a model-typed response under `status`, replacing any earlier
    /// response for that code.
    ///
    /// # Errors
    ///
    /// Propagates [`SchemaError`] from registering `T`.
    pub fn response_model<T: JsonSchema + 'static>(
        &mut self,
        status: &str,
        description: Option<&str>,
    ) -> Result<&mut Self, SchemaError> {
        let name = self.registry.register::<T>()?;
        self.endpoint.responses.insert(
            status.to_string(),
            Response {
                description: description.map(str::to_string),
                schema: Some(SchemaRef::component(&name)),
            },
        );
        Ok(self)
    }

    /// Attach a description-only response under `status`.
    pub fn response(&mut self, status: &str, description: &str) -> &mut Self {
        self.endpoint.responses.insert(
            status.to_string(),
            Response {
                description: Some(description.to_string()),
                schema: None,
            },
        );
        self
    }

    /// Shorthand for a `"200"` response of `T` described as
    /// `"Default response"`.
    ///
    /// # Errors
    ///
    /// Propagates [`SchemaError`] from registering `T`.
    pub fn default_response<T: JsonSchema + 'static>(
        &mut self,
    ) -> Result<&mut Self, SchemaError> {
        self.response_model::<T>("200", Some("Default response"))
    }

    /// Append a request parameter resolved through the inline type mapper.
    ///
    /// `required` and `deprecated` materialize on the wire only when true.
    pub fn request_parameter(&mut self, spec: ParameterSpec<'_>) -> &mut Self {
        let mut schema = resolve_inline_schema(spec.kind, spec.is_array);
        if let Some(format) = spec.format {
            schema = apply_format(schema, format);
        }

        self.endpoint.parameters.push(RequestParameter {
            name: spec.name.to_string(),
            location: spec.location,
            required: spec.required.then_some(true),
            deprecated: spec.deprecated.then_some(true),
            description: spec.description.map(str::to_string),
            schema,
        });
        self
    }

    /// Replace the request body with a single-content-type body referencing
    /// the model `T`. Earlier bodies are dropped, not merged.
    ///
    /// # Errors
    ///
    /// Propagates [`SchemaError`] from registering `T`.
    pub fn request_model<T: JsonSchema + 'static>(
        &mut self,
        body: BodySpec<'_>,
    ) -> Result<&mut Self, SchemaError> {
        let name = self.registry.register::<T>()?;
        let mut content = IndexMap::new();
        content.insert(
            body.content_type.to_string(),
            MediaType {
                schema: SchemaRef::component(&name),
            },
        );
        self.endpoint.request_body = Some(RequestBody {
            required: body.required,
            description: body.description.map(str::to_string),
            content,
        });
        Ok(self)
    }

    /// Set the description. Tags are taken only when `tags` is non-empty and
    /// none were set before; an existing tag set is never overwritten.
    pub fn description(&mut self, description: &str, tags: &[&str]) -> &mut Self {
        if self.endpoint.tags.is_none() && !tags.is_empty() {
            self.endpoint.tags = Some(tags.iter().map(|t| (*t).to_string()).collect());
        }
        self.endpoint.description = Some(description.to_string());
        self
    }

    pub fn summary(&mut self, summary: &str) -> &mut Self {
        self.endpoint.summary = Some(summary.to_string());
        self
    }

    pub fn external_docs(&mut self, url: &str, description: &str) -> &mut Self {
        self.endpoint.external_docs = Some(ExternalDocumentation {
            url: url.to_string(),
            description: Some(description.to_string()),
        });
        self
    }

    pub fn deprecated(&mut self) -> &mut Self {
        self.endpoint.deprecated = true;
        self
    }

    /// Finished endpoint record.
    pub fn into_endpoint(self) -> Endpoint {
        self.endpoint
    }

    /// Read access to the record under construction.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

fn apply_format(schema: SchemaRef, format: &str) -> SchemaRef {
    match schema {
        SchemaRef::Inline { schema_type, .. } => SchemaRef::Inline {
            schema_type,
            format: Some(format.to_string()),
        },
        SchemaRef::Array {
            schema_type,
            mut item,
        } => {
            item.format = Some(format.to_string());
            SchemaRef::Array { schema_type, item }
        }
        reference @ SchemaRef::Ref { .. } => reference,
    }
}
