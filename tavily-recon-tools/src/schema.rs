//! JSON schema construction for tool parameters.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

/// Object schema of a tool's arguments.
///
/// Properties serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    schema_type: &'static str,
    /// Property schemas by name.
    pub properties: IndexMap<String, JsonValue>,
    /// Names of required properties.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// Fluent builder for tool parameter schemas.
///
/// # Example
///
/// ```rust
/// use tavily_recon_tools::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .string("query", "The search query", true)
///     .integer_constrained("limit", "Maximum results", false, Some(1), Some(20))
///     .enum_values("depth", "Search depth", &["basic", "advanced"], false)
///     .build();
/// assert_eq!(schema.required, vec!["query"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    properties: IndexMap<String, JsonValue>,
    required: Vec<String>,
}

impl SchemaBuilder {
    /// Create a new empty schema builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn property(mut self, name: &str, schema: JsonValue, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required && !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
        self
    }

    /// Add a string property.
    #[must_use]
    pub fn string(self, name: &str, desc: &str, required: bool) -> Self {
        self.property(
            name,
            json!({
                "type": "string",
                "description": desc
            }),
            required,
        )
    }

    /// Add an integer property with optional bounds.
    #[must_use]
    pub fn integer_constrained(
        self,
        name: &str,
        desc: &str,
        required: bool,
        minimum: Option<i64>,
        maximum: Option<i64>,
    ) -> Self {
        let mut prop = json!({
            "type": "integer",
            "description": desc
        });
        if let Some(min) = minimum {
            prop["minimum"] = JsonValue::from(min);
        }
        if let Some(max) = maximum {
            prop["maximum"] = JsonValue::from(max);
        }
        self.property(name, prop, required)
    }

    /// Add a boolean property.
    #[must_use]
    pub fn boolean(self, name: &str, desc: &str, required: bool) -> Self {
        self.property(
            name,
            json!({
                "type": "boolean",
                "description": desc
            }),
            required,
        )
    }

    /// Add an array-of-strings property.
    #[must_use]
    pub fn string_array(self, name: &str, desc: &str, required: bool) -> Self {
        self.property(
            name,
            json!({
                "type": "array",
                "description": desc,
                "items": {"type": "string"}
            }),
            required,
        )
    }

    /// Add a string property restricted to fixed values.
    #[must_use]
    pub fn enum_values(self, name: &str, desc: &str, values: &[&str], required: bool) -> Self {
        self.property(
            name,
            json!({
                "type": "string",
                "description": desc,
                "enum": values
            }),
            required,
        )
    }

    /// Set the default of an already-declared property.
    ///
    /// Unknown names are ignored.
    #[must_use]
    pub fn default_value(mut self, name: &str, value: impl Into<JsonValue>) -> Self {
        if let Some(prop) = self.properties.get_mut(name) {
            prop["default"] = value.into();
        }
        self
    }

    /// Finish the schema.
    #[must_use]
    pub fn build(self) -> ObjectSchema {
        ObjectSchema {
            schema_type: "object",
            properties: self.properties,
            required: self.required,
        }
    }
}
