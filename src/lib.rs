//! Travel MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes a catalogue of sample
//! travel tools: flight schedules, hotel listings, city information, weather,
//! routes, seasonal advice, local transport and budgets, plus a couple of
//! utility tools. Every response is generated; nothing talks to a real
//! booking system.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the
//!   transports (STDIO, TCP, HTTP)
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the tool catalogue, its router and registry
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
