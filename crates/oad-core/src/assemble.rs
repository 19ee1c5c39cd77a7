use indexmap::IndexMap;

use crate::catalog::RouteCatalog;
use crate::error::BuildError;
use crate::fluent::EndpointBuilder;
use crate::model::components::Components;
use crate::model::operation::Endpoint;
use crate::model::security::SecurityScheme;
use crate::model::server::Server;
use crate::model::spec::{ExternalDocumentation, Info, OpenApiDocument, Tag, OPENAPI_VERSION};
use crate::registry::SchemaRegistry;

/// Assembles one OpenAPI 3.0 document from a route catalog.
///
/// The builder owns the schema registry for the run: every model type
/// referenced while the catalog's callbacks execute lands in
/// `components.schemas` exactly once, no matter how many endpoints share it.
pub struct DocumentBuilder {
    info: Info,
    servers: Vec<Server>,
    tags: Vec<Tag>,
    external_docs: Option<ExternalDocumentation>,
    security_schemes: IndexMap<String, SecurityScheme>,
    registry: SchemaRegistry,
}

impl DocumentBuilder {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self::with_registry(title, version, SchemaRegistry::new())
    }

    /// Build on a pre-seeded registry.
    pub fn with_registry(
        title: impl Into<String>,
        version: impl Into<String>,
        registry: SchemaRegistry,
    ) -> Self {
        Self {
            info: Info::new(title, version),
            servers: Vec::new(),
            tags: Vec::new(),
            external_docs: None,
            security_schemes: IndexMap::new(),
            registry,
        }
    }

    /// Replace the whole info object, keeping everything else.
    #[must_use]
    pub fn info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn server(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.servers.push(Server::new(url, description));
        self
    }

    #[must_use]
    pub fn tag(mut self, name: impl Into<String>, description: Option<String>) -> Self {
        self.tags.push(Tag {
            name: name.into(),
            description,
            external_docs: None,
        });
        self
    }

    #[must_use]
    pub fn external_docs(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.external_docs = Some(ExternalDocumentation {
            url: url.into(),
            description,
        });
        self
    }

    /// Store a security scheme under `components.securitySchemes`.
    #[must_use]
    pub fn security_scheme(mut self, name: impl Into<String>, scheme: SecurityScheme) -> Self {
        self.security_schemes.insert(name.into(), scheme);
        self
    }

    /// Registry access for pre-registering schemas before assembly.
    pub fn registry_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.registry
    }

    /// Run every catalog callback once and assemble the document.
    ///
    /// Endpoints land under `paths[path][method]`, keys cased as registered;
    /// when two routes describe the same pair, the later registration wins.
    /// After the pass the registry snapshot becomes `components.schemas`.
    ///
    /// # Errors
    ///
    /// The first failing callback aborts the pass with
    /// [`BuildError::Describe`]; no partial document is produced.
    pub fn assemble(mut self, catalog: &RouteCatalog) -> Result<OpenApiDocument, BuildError> {
        // Phase 1: describe every route, single-threaded, in catalog order.
        let mut paths: IndexMap<String, IndexMap<String, Endpoint>> = IndexMap::new();
        for (name, entry) in catalog.iter() {
            let mut builder = EndpointBuilder::new(&mut self.registry);
            (entry.describe)(&mut builder).map_err(|source| BuildError::Describe {
                route: name.clone(),
                source,
            })?;
            log::debug!("described route `{name}`: {} {}", entry.method, entry.path);
            paths
                .entry(entry.path.clone())
                .or_default()
                .insert(entry.method.clone(), builder.into_endpoint());
        }

        // Phase 2: snapshot the registry into the components object.
        let components = Components {
            schemas: self.registry.into_schemas(),
            security_schemes: self.security_schemes,
        };

        Ok(OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: self.info,
            servers: self.servers,
            paths,
            components,
            tags: self.tags,
            external_docs: self.external_docs,
        })
    }
}
