//! Airline catalogue tool.

use rmcp::model::CallToolResult;

use super::super::{NoParams, ToolDefinition};
use super::common::AIRLINES;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::value_result;

/// Lists the airlines known to the flight tools.
pub struct FlightAirlinesTool;

impl ToolDefinition for FlightAirlinesTool {
    const NAME: &'static str = "flight.getAirlines";
    const DESCRIPTION: &'static str =
        "Lists available airlines with their IATA code and Turkish name.";

    type Params = NoParams;

    fn execute(_params: &NoParams, _ctx: &ToolContext) -> CallToolResult {
        value_result(AIRLINES)
    }
}
