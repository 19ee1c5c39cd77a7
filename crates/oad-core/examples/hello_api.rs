//! Describes a small greeting API and prints the assembled document as JSON.
//!
//! Run with `cargo run --example hello_api`; set `RUST_LOG=debug` to watch
//! the registry and assembly at work.

use anyhow::Result;
use oad_core::fluent::{BodySpec, ParameterSpec};
use oad_core::{DocumentBuilder, JsonSchema, RouteCatalog};

/// Greeting returned by every route.
#[derive(JsonSchema)]
struct GreetingResponse {
    hello: String,
}

/// Payload accepted by the POST routes.
#[derive(JsonSchema)]
struct GreetingRequest {
    name: String,
    #[schema(rename = "nicknames")]
    aliases: Option<Vec<String>>,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut catalog = RouteCatalog::new();

    catalog.describe("hello", "get", "/api/hello", |op| {
        op.summary("Simple GET example")
            .response_model::<GreetingResponse>("200", Some("Sample response"))?;
        Ok(())
    });

    catalog.describe("hello-by-name", "get", "/api/hello/{name}", |op| {
        op.summary("Simple GET with parameters")
            .request_parameter(ParameterSpec {
                name: "name",
                ..ParameterSpec::default()
            })
            .response_model::<GreetingResponse>("200", Some("Sample response"))?;
        Ok(())
    });

    catalog.describe("hello-count", "get", "/api/count/{number}", |op| {
        op.summary("Simple GET with numeric parameters")
            .request_parameter(ParameterSpec {
                name: "number",
                kind: "integer",
                ..ParameterSpec::default()
            })
            .response_model::<GreetingResponse>("200", Some("Sample response"))?;
        Ok(())
    });

    catalog.describe("hello-by-names", "get", "/api/hellos/{names}", |op| {
        op.summary("Simple GET with array parameters")
            .request_parameter(ParameterSpec {
                name: "names",
                is_array: true,
                ..ParameterSpec::default()
            })
            .response_model::<GreetingResponse>("200", Some("Sample response"))?;
        Ok(())
    });

    catalog.describe("hello-post", "post", "/api/hello", |op| {
        op.summary("Simple POST example with request model")
            .description("Stores a greeting for later", &["greetings"])
            .request_model::<GreetingRequest>(BodySpec {
                description: Some("The greeting to store"),
                ..BodySpec::default()
            })?
            .response_model::<GreetingResponse>("200", Some("Simple response"))?
            .response("400", "Validation failed");
        Ok(())
    });

    let doc = DocumentBuilder::new("Greeting API", "1.0.0")
        .description("Demo documentation assembled by openapi-describe")
        .server("http://localhost:8080", Some("Local development".to_string()))
        .tag("greetings", Some("Greeting operations".to_string()))
        .assemble(&catalog)?;

    println!("{}", oad_core::render::to_json_pretty(&doc)?);
    Ok(())
}
