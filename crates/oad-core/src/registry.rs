use std::any::TypeId;
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::SchemaError;
use crate::model::schema::{JsonSchema, Schema};

/// Deduplicating cache of component schemas, keyed by type identity.
///
/// Each registry is an independent cache with an owned lifetime: two
/// registries never share names, so separate document assemblies (and tests)
/// stay isolated. The `&mut` receiver on [`register`](Self::register) makes
/// concurrent registration unrepresentable.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    names: HashMap<TypeId, String>,
    schemas: IndexMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` and return its component name.
    ///
    /// The first registration generates the fragment; registering the same
    /// type again returns the stored name without re-deriving anything.
    /// Names are stable for the registry's lifetime, and distinct types get
    /// distinct names because they qualify by full module path.
    ///
    /// # Errors
    ///
    /// Propagates [`SchemaError`] from `T::schema()` unchanged; a failed
    /// registration leaves the registry untouched.
    pub fn register<T: JsonSchema + 'static>(&mut self) -> Result<String, SchemaError> {
        let id = TypeId::of::<T>();
        if let Some(name) = self.names.get(&id) {
            log::trace!("schema cache hit for `{name}`");
            return Ok(name.clone());
        }

        let name = component_name(&T::schema_name());
        let fragment = T::schema()?;
        log::debug!("registered component schema `{name}`");
        self.names.insert(id, name.clone());
        self.schemas.insert(name.clone(), fragment);
        Ok(name)
    }

    /// Name-to-fragment view, in registration order.
    pub fn schemas(&self) -> &IndexMap<String, Schema> {
        &self.schemas
    }

    pub fn into_schemas(self) -> IndexMap<String, Schema> {
        self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Map a fully qualified type path onto the component-key charset: path
/// separators become dots, anything else outside `[A-Za-z0-9._-]` becomes an
/// underscore.
fn component_name(type_path: &str) -> String {
    type_path
        .replace("::", ".")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::Schema;

    struct First {
        _x: (),
    }

    impl JsonSchema for First {
        fn schema() -> Result<Schema, SchemaError> {
            Ok(Schema::object().property("value", Schema::string(), true))
        }
    }

    struct Second {
        _x: (),
    }

    impl JsonSchema for Second {
        fn schema() -> Result<Schema, SchemaError> {
            Ok(Schema::object().property("count", Schema::integer("int32"), true))
        }
    }

    struct Opaque;

    impl JsonSchema for Opaque {
        fn schema() -> Result<Schema, SchemaError> {
            Err(SchemaError::Unsupported {
                type_name: "Opaque".to_string(),
                reason: "no stable shape".to_string(),
            })
        }
    }

    #[test]
    fn registration_is_idempotent() {
        let mut registry = SchemaRegistry::new();
        let a = registry.register::<First>().unwrap();
        let b = registry.register::<First>().unwrap();
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_stay_stable_under_repetition() {
        let mut registry = SchemaRegistry::new();
        let first = registry.register::<First>().unwrap();
        registry.register::<Second>().unwrap();
        let again = registry.register::<First>().unwrap();
        assert_eq!(first, again);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn names_qualify_by_module_path() {
        let mut registry = SchemaRegistry::new();
        let name = registry.register::<First>().unwrap();
        assert!(name.ends_with(".First"), "got `{name}`");
        assert!(!name.contains("::"));
    }

    #[test]
    fn generation_failure_propagates_and_stores_nothing() {
        let mut registry = SchemaRegistry::new();
        let err = registry.register::<Opaque>().unwrap_err();
        assert!(matches!(err, SchemaError::Unsupported { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn registries_are_isolated() {
        let mut one = SchemaRegistry::new();
        let mut two = SchemaRegistry::new();
        one.register::<First>().unwrap();
        assert_eq!(one.len(), 1);
        assert!(two.is_empty());
        two.register::<Second>().unwrap();
        assert_eq!(two.len(), 1);
        assert!(!two.schemas().contains_key(&one.register::<First>().unwrap()));
    }

    #[test]
    fn component_name_charset() {
        assert_eq!(component_name("demo::models::User"), "demo.models.User");
        assert_eq!(
            component_name("alloc::vec::Vec<alloc::string::String>"),
            "alloc.vec.Vec_alloc.string.String_"
        );
    }
}
