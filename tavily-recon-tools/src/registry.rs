//! Name-to-tool lookup.

use std::collections::HashMap;
use tracing::debug;

use crate::{
    errors::ToolError,
    tool::{BoxedTool, ToolDefinition, ToolResult},
};

/// Registered tools, keyed by name.
///
/// # Example
///
/// ```rust
/// use tavily_recon_client::TavilyClient;
/// use tavily_recon_core::TavilyConfig;
/// use tavily_recon_tools::ToolRegistry;
///
/// # fn main() -> tavily_recon_core::Result<()> {
/// let client = TavilyClient::new(TavilyConfig::new("tvly-key"))?;
/// let registry = ToolRegistry::tavily(client);
/// assert!(registry.contains("tavily_research"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, BoxedTool>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: BoxedTool) -> &mut Self {
        self.tools.insert(tool.name(), tool);
        self
    }

    /// All tool definitions, sorted by name.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<_> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Call a tool by name.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::NotFound` if no tool with the given name exists,
    /// otherwise whatever the tool returns.
    pub async fn call(&self, name: &str, args: serde_json::Value) -> ToolResult {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::not_found(name))?;

        debug!(tool = name, "calling tool");
        tool.call(args).await
    }

    /// Check if a tool exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BoxedTool> {
        self.tools.get(name)
    }

    /// All tool names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schema::SchemaBuilder, tool::Tool};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new(
                "echo",
                "Echo the message",
                SchemaBuilder::new().string("message", "Message", true).build(),
            )
        }

        async fn call(&self, args: serde_json::Value) -> ToolResult {
            Ok(args["message"].as_str().unwrap_or("<empty>").to_string())
        }
    }

    struct ShoutTool;

    #[async_trait]
    impl Tool for ShoutTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new(
                "shout",
                "Upper-case the message",
                SchemaBuilder::new().build(),
            )
        }

        async fn call(&self, args: serde_json::Value) -> ToolResult {
            Ok(args["message"].as_str().unwrap_or_default().to_uppercase())
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ToolRegistry::new();
        registry
            .register(Arc::new(EchoTool))
            .register(Arc::new(EchoTool))
            .register(Arc::new(ShoutTool));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["echo", "shout"]);

        let names: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["echo", "shout"]);
        assert!(format!("{registry:?}").contains("echo"));
    }

    #[tokio::test]
    async fn test_call_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(ShoutTool));
        let ret = registry.call("shout", json!({"message": "hello"})).await.unwrap();
        assert_eq!(ret, "HELLO");
    }

    #[test]
    fn test_call_not_found() {
        let registry = ToolRegistry::new();
        let result = tokio_test::block_on(registry.call("nonexistent", json!({})));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
