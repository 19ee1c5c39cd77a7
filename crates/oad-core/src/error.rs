use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("cannot generate a schema for `{type_name}`: {reason}")]
    Unsupported { type_name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to describe route `{route}`: {source}")]
    Describe {
        route: String,
        #[source]
        source: SchemaError,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
