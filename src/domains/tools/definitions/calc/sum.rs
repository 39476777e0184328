//! Integer addition tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::super::ToolDefinition;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::value_result;

/// Parameters for the sum tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SumParams {
    /// First addend.
    pub a: i32,

    /// Second addend.
    pub b: i32,
}

/// Adds two 32-bit integers.
pub struct SumTool;

impl SumTool {
    /// The sum, widened so no pair of inputs can overflow.
    pub fn sum(a: i32, b: i32) -> i64 {
        i64::from(a) + i64::from(b)
    }
}

impl ToolDefinition for SumTool {
    const NAME: &'static str = "sum";
    const DESCRIPTION: &'static str = "Adds two integers and returns the result.";

    type Params = SumParams;

    fn execute(params: &SumParams, _ctx: &ToolContext) -> CallToolResult {
        debug!("sum({}, {})", params.a, params.b);
        value_result(&Self::sum(params.a, params.b))
    }
}
