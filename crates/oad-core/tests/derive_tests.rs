use oad_core::JsonSchema;

/// A plain record with one required and one optional field.
#[derive(JsonSchema)]
struct Simple {
    id: i64,
    note: Option<String>,
}

#[derive(JsonSchema)]
struct Attributed {
    #[schema(rename = "createdAt", format = "date-time")]
    created_at: String,
    #[schema(skip)]
    internal: String,
    labels: Vec<String>,
}

#[derive(JsonSchema)]
struct Outer {
    inner: Simple,
}

#[test]
fn required_follows_option() {
    let schema = Simple::schema().expect("should generate");
    assert_eq!(schema.schema_type.as_deref(), Some("object"));
    assert_eq!(schema.required, vec!["id".to_string()]);

    let id = &schema.properties["id"];
    assert_eq!(id.schema_type.as_deref(), Some("integer"));
    assert_eq!(id.format.as_deref(), Some("int64"));

    let note = &schema.properties["note"];
    assert_eq!(note.schema_type.as_deref(), Some("string"));
    assert_eq!(note.nullable, Some(true));
}

#[test]
fn doc_comment_becomes_description() {
    let schema = Simple::schema().expect("should generate");
    assert_eq!(
        schema.description.as_deref(),
        Some("A plain record with one required and one optional field.")
    );
}

#[test]
fn attributes_rename_skip_and_format() {
    let schema = Attributed::schema().expect("should generate");
    assert!(schema.properties.contains_key("createdAt"));
    assert!(!schema.properties.contains_key("created_at"));
    assert!(!schema.properties.contains_key("internal"));
    assert_eq!(
        schema.properties["createdAt"].format.as_deref(),
        Some("date-time")
    );
    assert_eq!(
        schema.required,
        vec!["createdAt".to_string(), "labels".to_string()]
    );

    let labels = &schema.properties["labels"];
    assert_eq!(labels.schema_type.as_deref(), Some("array"));
}

#[test]
fn nested_models_inline_recursively() {
    let schema = Outer::schema().expect("should generate");
    let inner = &schema.properties["inner"];
    assert_eq!(inner.schema_type.as_deref(), Some("object"));
    assert!(inner.properties.contains_key("id"));
    assert_eq!(inner.required, vec!["id".to_string()]);
}

#[test]
fn schema_name_is_fully_qualified() {
    assert_eq!(Simple::schema_name(), "derive_tests::Simple");
}
