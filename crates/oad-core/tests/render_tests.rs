use oad_core::{render, DocumentBuilder, JsonSchema, RouteCatalog};

#[derive(JsonSchema)]
struct Ping {
    ok: bool,
}

#[test]
fn empty_document_compact_json() {
    let catalog = RouteCatalog::new();
    let doc = DocumentBuilder::new("Empty API", "0.0.1")
        .assemble(&catalog)
        .expect("should assemble");

    let json = render::to_json(&doc).expect("should render");
    insta::assert_snapshot!(
        json,
        @r#"{"openapi":"3.0.0","info":{"title":"Empty API","version":"0.0.1"},"components":{}}"#
    );
}

#[test]
fn pretty_json_round_trips() {
    let mut catalog = RouteCatalog::new();
    catalog.describe("ping", "get", "/ping", |op| {
        op.default_response::<Ping>()?;
        Ok(())
    });

    let doc = DocumentBuilder::new("Ping API", "1.0.0")
        .assemble(&catalog)
        .expect("should assemble");

    let pretty = render::to_json_pretty(&doc).expect("should render");
    let parsed: oad_core::OpenApiDocument =
        serde_json::from_str(&pretty).expect("should parse back");
    assert_eq!(parsed, doc);
}

#[test]
fn yaml_renders() {
    let mut catalog = RouteCatalog::new();
    catalog.describe("ping", "get", "/ping", |op| {
        op.response("204", "No content");
        Ok(())
    });

    let doc = DocumentBuilder::new("Ping API", "1.0.0")
        .assemble(&catalog)
        .expect("should assemble");

    let yaml = render::to_yaml(&doc).expect("should render");
    assert!(yaml.contains("openapi:"));
    assert!(yaml.contains("/ping"));
}
