use crate::model::schema::SchemaRef;

/// Resolve an inline parameter schema from a type token.
///
/// Tokens match the OAS data-type table case-insensitively; anything
/// unrecognized passes through as the schema type exactly as given, with no
/// format. When `is_array`, the resolved pair is wrapped as the `item` of an
/// array schema. Pure: no registry interaction.
pub fn resolve_inline_schema(token: &str, is_array: bool) -> SchemaRef {
    let lowered = token.to_ascii_lowercase();
    let (schema_type, format) = match lowered.as_str() {
        "string" => ("string", None),
        "int" | "integer" => ("integer", Some("int32")),
        "long" => ("integer", Some("int64")),
        "float" => ("number", Some("float")),
        "double" => ("number", Some("double")),
        "byte" => ("string", Some("byte")),
        "binary" => ("string", Some("binary")),
        "bool" | "boolean" => ("boolean", None),
        "date" => ("string", Some("date")),
        "datetime" => ("string", Some("date-time")),
        "password" => ("string", Some("password")),
        _ => (token, None),
    };

    let format = format.map(str::to_string);
    if is_array {
        SchemaRef::array_of(schema_type, format)
    } else {
        SchemaRef::inline(schema_type, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::Item;

    fn inline(schema_type: &str, format: Option<&str>) -> SchemaRef {
        SchemaRef::Inline {
            schema_type: schema_type.to_string(),
            format: format.map(str::to_string),
        }
    }

    #[test]
    fn test_mapping_table() {
        let cases = [
            ("string", "string", None),
            ("int", "integer", Some("int32")),
            ("integer", "integer", Some("int32")),
            ("long", "integer", Some("int64")),
            ("float", "number", Some("float")),
            ("double", "number", Some("double")),
            ("byte", "string", Some("byte")),
            ("binary", "string", Some("binary")),
            ("bool", "boolean", None),
            ("boolean", "boolean", None),
            ("date", "string", Some("date")),
            ("datetime", "string", Some("date-time")),
            ("password", "string", Some("password")),
        ];
        for (token, expected_type, expected_format) in cases {
            assert_eq!(
                resolve_inline_schema(token, false),
                inline(expected_type, expected_format),
                "token `{token}`"
            );
        }
    }

    #[test]
    fn test_tokens_match_case_insensitively() {
        assert_eq!(
            resolve_inline_schema("DateTime", false),
            inline("string", Some("date-time"))
        );
        assert_eq!(
            resolve_inline_schema("INTEGER", false),
            inline("integer", Some("int32"))
        );
    }

    #[test]
    fn test_unrecognized_token_passes_through() {
        assert_eq!(
            resolve_inline_schema("unknown-token", false),
            inline("unknown-token", None)
        );
        // Pass-through keeps the caller's casing.
        assert_eq!(resolve_inline_schema("GUID", false), inline("GUID", None));
    }

    #[test]
    fn test_array_wrapping() {
        assert_eq!(
            resolve_inline_schema("datetime", true),
            SchemaRef::Array {
                schema_type: "array".to_string(),
                item: Item {
                    schema_type: "string".to_string(),
                    format: Some("date-time".to_string()),
                },
            }
        );
    }
}
