//! Core tool trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::{errors::ToolError, schema::ObjectSchema};

/// Name, description and parameter schema handed to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// What the tool does.
    pub description: String,
    /// JSON Schema of the arguments.
    pub parameters: ObjectSchema,
}

impl ToolDefinition {
    /// Create a definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ObjectSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Result of a tool call: the text report the model reads.
pub type ToolResult = Result<String, ToolError>;

/// A callable tool taking JSON arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's definition.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given arguments.
    async fn call(&self, args: JsonValue) -> ToolResult;

    /// The tool name.
    fn name(&self) -> String {
        self.definition().name
    }
}

/// Type-erased shared tool.
pub type BoxedTool = Arc<dyn Tool>;

/// Deserialize tool-call arguments, reporting serde's message on failure.
pub fn parse_args<T: DeserializeOwned>(args: JsonValue) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|e| ToolError::invalid_args(e.to_string()))
}
