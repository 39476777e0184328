//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - JSON dispatch for tool calls (used by the HTTP transport)

use std::sync::Arc;

use rmcp::model::CallToolResult;
use serde_json::Value;
use tracing::{debug, warn};

use super::context::ToolContext;
use super::definitions::{
    EmployeeListTool, FlightAirlinesTool, FlightPopularRoutesTool, FlightSearchByAirlineTool,
    FlightSearchByCityTool, FlightSearchByDateTool, GreetTool, HotelDetailsTool, HotelPopularTool,
    HotelSearchByCityTool, HotelSearchByDateTool, HotelSearchByPriceRangeTool,
    HotelSearchByRatingTool, SumTool, ToolDefinition, TravelBudgetTool, TravelCityInfoTool,
    TravelRouteTool, TravelSeasonalTool, TravelTransportationTool, TravelWeatherTool,
};
use super::error::ToolError;
use crate::core::Result;

type CallFn = fn(Value, &ToolContext) -> std::result::Result<CallToolResult, ToolError>;

/// Name and entry point of one tool.
struct ToolEntry {
    name: &'static str,
    call: CallFn,
}

fn entry<T: ToolDefinition>() -> ToolEntry {
    ToolEntry {
        name: T::NAME,
        call: T::call,
    }
}

fn entries() -> [ToolEntry; 20] {
    [
        entry::<SumTool>(),
        entry::<GreetTool>(),
        entry::<EmployeeListTool>(),
        entry::<FlightSearchByDateTool>(),
        entry::<FlightSearchByCityTool>(),
        entry::<FlightSearchByAirlineTool>(),
        entry::<FlightPopularRoutesTool>(),
        entry::<FlightAirlinesTool>(),
        entry::<HotelSearchByCityTool>(),
        entry::<HotelSearchByRatingTool>(),
        entry::<HotelSearchByPriceRangeTool>(),
        entry::<HotelDetailsTool>(),
        entry::<HotelSearchByDateTool>(),
        entry::<HotelPopularTool>(),
        entry::<TravelCityInfoTool>(),
        entry::<TravelWeatherTool>(),
        entry::<TravelRouteTool>(),
        entry::<TravelSeasonalTool>(),
        entry::<TravelTransportationTool>(),
        entry::<TravelBudgetTool>(),
    ]
}

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing the registered tool names
/// - Dispatching tool calls given as raw JSON
pub struct ToolRegistry {
    ctx: Arc<ToolContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(ctx: Arc<ToolContext>) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        entries().iter().map(|e| e.name).collect()
    }

    /// Dispatch a tool call by name.
    ///
    /// Returns the serialized `CallToolResult`. Failures inside a tool come
    /// back as a result flagged `isError`; only an unknown tool or arguments
    /// of the wrong type are reported as `Err`.
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<Value> {
        let Some(entry) = entries().into_iter().find(|e| e.name == name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name).into());
        };

        debug!("Dispatching tool call: {}", name);
        let result = (entry.call)(arguments, &self.ctx)?;
        Ok(serde_json::to_value(result)?)
    }
}
