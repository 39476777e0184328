//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the externally invocable operations of the travel assistant:
//! small calculators, the employee directory, and the flight, hotel and
//! travel information catalogues.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder used by every rmcp transport
//! - `registry.rs` - Central tool registry and JSON dispatch for HTTP
//! - `context.rs` - Injectable random source and reference date
//! - `response.rs` - Turning tool outcomes into `CallToolResult`s
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the topic directory under `definitions/`
//! 2. Define params and implement `ToolDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` and the entry in `registry.rs`
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

pub mod context;
pub mod definitions;
mod error;
mod registry;
pub mod response;
pub mod router;

pub use context::ToolContext;
pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
