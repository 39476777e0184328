//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by topic.
//! Each tool is defined in its own file and implements [`ToolDefinition`].
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the topic directory (e.g., `hotel/my_tool.rs`)
//! 2. Define a params struct and implement `ToolDefinition`
//! 3. Export it here
//! 4. Add it to `router.rs` and `registry.rs`

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::context::ToolContext;
use super::error::ToolError;

pub mod calc;
pub mod common;
pub mod employee;
pub mod flight;
pub mod hotel;
pub mod travel;

pub use calc::{GreetTool, SumTool};
pub use employee::EmployeeListTool;
pub use flight::{
    FlightAirlinesTool, FlightPopularRoutesTool, FlightSearchByAirlineTool,
    FlightSearchByCityTool, FlightSearchByDateTool,
};
pub use hotel::{
    HotelDetailsTool, HotelPopularTool, HotelSearchByCityTool, HotelSearchByDateTool,
    HotelSearchByPriceRangeTool, HotelSearchByRatingTool,
};
pub use travel::{
    TravelBudgetTool, TravelCityInfoTool, TravelRouteTool, TravelSeasonalTool,
    TravelTransportationTool, TravelWeatherTool,
};

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Trait for tool definitions.
///
/// Each tool provides its metadata, a params type (which doubles as its JSON
/// Schema) and a synchronous `execute`. Routing and HTTP dispatch are
/// derived from these.
pub trait ToolDefinition {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Execute the tool logic.
    fn execute(params: &Self::Params, ctx: &ToolContext) -> CallToolResult;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Decode raw JSON arguments and execute.
    fn call(arguments: serde_json::Value, ctx: &ToolContext) -> Result<CallToolResult, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => other,
        };
        let params: Self::Params = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(&params, ctx))
    }

    /// Create a ToolRoute for the rmcp router.
    fn create_route<S>(ctx: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
        Self: Sized + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move {
                Self::call(serde_json::Value::Object(args), &ctx)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tool_metadata() {
        let tool = SumTool::to_tool();
        assert_eq!(tool.name, "sum");
        assert!(tool.description.is_some());
        assert!(tool.input_schema.contains_key("properties"));
    }

    #[test]
    fn test_call_accepts_null_arguments() {
        let result = EmployeeListTool::call(serde_json::Value::Null, &ToolContext::new());
        assert!(result.is_ok());
    }

    #[test]
    fn test_call_rejects_wrong_types() {
        let result = SumTool::call(
            serde_json::json!({ "a": "one", "b": 2 }),
            &ToolContext::new(),
        );
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
