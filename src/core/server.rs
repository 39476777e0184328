//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`, grouped by topic with
//! one file per tool. Each tool defines:
//! - Parameters struct (deserialized from the call, doubles as JSON Schema)
//! - `execute()` method (core logic)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::debug;

use super::config::Config;
use crate::domains::tools::{ToolContext, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Travel assistant MCP server. Provides sample flight, hotel and \
    travel information for Turkish cities (flight.*, hotel.*, travel.* tools) plus a few \
    utility tools. All data is generated; prices are in TL and dates use YYYY-MM-DD.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap to
/// clone; the TCP transport hands one clone to each connection.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Random source and reference date shared by every tool.
    ctx: Arc<ToolContext>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let ctx = Arc::new(ToolContext::from_config(&config.sampling));

        let names = ToolRegistry::new(ctx.clone()).tool_names();
        debug!("Registered {} tools: {}", names.len(), names.join(", "));

        Self {
            tool_router: build_tool_router::<Self>(ctx.clone()),
            config,
            ctx,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Usage notes sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Dispatches through the [`ToolRegistry`] with the same context the
    /// rmcp router uses.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> super::error::Result<serde_json::Value> {
        debug!("HTTP tool call: {}", name);
        ToolRegistry::new(self.ctx.clone()).call_tool(name, arguments)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SamplingConfig;
    use chrono::NaiveDate;
    use serde_json::json;

    fn test_server() -> McpServer {
        let mut config = Config::default();
        config.sampling = SamplingConfig {
            seed: Some(5),
            reference_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        };
        McpServer::new(config)
    }

    fn payload(result: &serde_json::Value) -> serde_json::Value {
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_server_info_enables_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("flight"));
    }

    #[test]
    fn test_list_tools() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 20);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_listed_tools_are_dispatchable() {
        let server = test_server();
        let registered = ToolRegistry::new(server.ctx.clone()).tool_names();
        let listed = server.list_tools();
        assert_eq!(listed.len(), registered.len());
        for tool in &listed {
            let name = tool["name"].as_str().unwrap();
            assert!(registered.iter().any(|r| *r == name), "{} is not dispatchable", name);
        }
    }

    #[test]
    fn test_call_tool_uses_sampling_config() {
        let server = test_server();
        let result = tokio_test::block_on(server.call_tool(
            "flight.searchByCity",
            json!({ "fromCity": "istanbul", "toCity": "ankara" }),
        ))
        .unwrap();
        let flights = payload(&result);
        assert_eq!(flights[0]["date"], "2024-03-15");
        assert_eq!(flights[0]["from"], "İstanbul");
    }

    #[tokio::test]
    async fn test_seeded_calls_repeat() {
        let server = test_server();
        let args = json!({ "cityName": "Antalya" });
        let first = server.call_tool("hotel.searchByCity", args.clone()).await.unwrap();
        let second = server.call_tool("hotel.searchByCity", args).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let result = test_server().call_tool("hotel.book", json!({})).await;
        assert!(result.is_err());
    }
}
