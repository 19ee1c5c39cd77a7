//! Fluent OpenAPI 3.0 documentation for named routes.
//!
//! Route descriptions are registered in a [`RouteCatalog`] and filled in by
//! fluent calls on an [`EndpointBuilder`](fluent::EndpointBuilder); model
//! types implement (usually derive) [`JsonSchema`] and are deduplicated into
//! `components.schemas` through a [`SchemaRegistry`].
//! [`DocumentBuilder::assemble`](assemble::DocumentBuilder::assemble) runs
//! every callback once and produces the final document for [`render`].
//!
//! ```
//! use oad_core::fluent::ParameterSpec;
//! use oad_core::{DocumentBuilder, JsonSchema, RouteCatalog};
//!
//! #[derive(JsonSchema)]
//! struct Greeting {
//!     message: String,
//! }
//!
//! let mut catalog = RouteCatalog::new();
//! catalog.describe("greet", "get", "/greet/{name}", |op| {
//!     op.summary("Greet by name")
//!         .request_parameter(ParameterSpec {
//!             name: "name",
//!             ..ParameterSpec::default()
//!         })
//!         .response_model::<Greeting>("200", Some("The greeting"))?;
//!     Ok(())
//! });
//!
//! let doc = DocumentBuilder::new("Greeting API", "1.0.0").assemble(&catalog)?;
//! assert!(oad_core::render::to_json(&doc)?.contains("#/components/schemas/"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod catalog;
pub mod error;
pub mod fluent;
pub mod model;
pub mod registry;
pub mod render;
pub mod type_mapper;

pub use assemble::DocumentBuilder;
pub use catalog::RouteCatalog;
pub use error::{BuildError, RenderError, SchemaError};
pub use fluent::{BodySpec, EndpointBuilder, ParameterSpec};
pub use model::schema::{JsonSchema, Schema, SchemaRef};
pub use model::spec::{Info, OpenApiDocument};
pub use registry::SchemaRegistry;

pub use oad_macros::JsonSchema;
