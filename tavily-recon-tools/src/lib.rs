//! # tavily-recon-tools
//!
//! Agent tool surface for the tavily-recon operations.
//!
//! ## Core Concepts
//!
//! - **[`Tool`]**: Trait for callable tools taking JSON arguments
//! - **[`ToolDefinition`]**: Name, description and [`SchemaBuilder`]-built argument schema
//! - **[`ToolRegistry`]**: Look up and call tools by name
//!
//! ## Using the Tavily tools
//!
//! ```rust,no_run
//! use serde_json::json;
//! use tavily_recon_client::TavilyClient;
//! use tavily_recon_core::TavilyConfig;
//! use tavily_recon_tools::ToolRegistry;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ToolRegistry::tavily(TavilyClient::new(TavilyConfig::from_env())?);
//!
//! // Hand the definitions to the model
//! let definitions = serde_json::to_value(registry.definitions())?;
//!
//! // Execute a call the model made
//! let report = registry
//!     .call("tavily_map", json!({"url": "https://docs.rs", "max_depth": 2}))
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod errors;
pub mod registry;
pub mod schema;
pub mod tavily;
pub mod tool;

pub use errors::ToolError;
pub use registry::ToolRegistry;
pub use schema::{ObjectSchema, SchemaBuilder};
pub use tavily::{
    tavily_tools, TavilyAnswerTool, TavilyCrawlTool, TavilyDomainSearchTool, TavilyExtractTool,
    TavilyImageSearchTool, TavilyMapTool, TavilyNewsTool, TavilyResearchTool, TavilySearchTool,
};
pub use tool::{parse_args, BoxedTool, Tool, ToolDefinition, ToolResult};
