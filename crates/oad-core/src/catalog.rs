use indexmap::IndexMap;

use crate::error::SchemaError;
use crate::fluent::EndpointBuilder;

type DescribeFn = Box<dyn Fn(&mut EndpointBuilder<'_>) -> Result<(), SchemaError>>;

/// A named route description: HTTP method, path template, and the callback
/// that fills in the endpoint metadata at assembly time.
pub struct RouteEntry {
    pub method: String,
    pub path: String,
    pub(crate) describe: DescribeFn,
}

/// Catalog of named route descriptions.
///
/// Callbacks are stored, not run:
/// [`DocumentBuilder::assemble`](crate::assemble::DocumentBuilder::assemble)
/// invokes each one exactly once, in registration order. Registering the
/// same route name again replaces the earlier entry.
#[derive(Default)]
pub struct RouteCatalog {
    routes: IndexMap<String, RouteEntry>,
}

impl RouteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route description under `name`.
    ///
    /// `method` is kept with the casing given here; it becomes the key under
    /// the path in the assembled document.
    pub fn describe<F>(
        &mut self,
        name: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
        describe: F,
    ) where
        F: Fn(&mut EndpointBuilder<'_>) -> Result<(), SchemaError> + 'static,
    {
        self.routes.insert(
            name.into(),
            RouteEntry {
                method: method.into(),
                path: path.into(),
                describe: Box::new(describe),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &RouteEntry)> {
        self.routes.iter()
    }
}
