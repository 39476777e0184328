//! Greeting tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::ToolDefinition;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::text_result;

/// Parameters for the greet tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GreetParams {
    /// Name of the person to greet.
    #[serde(default)]
    pub name: String,
}

/// Returns a greeting for a name.
pub struct GreetTool;

impl GreetTool {
    pub fn greeting(name: &str) -> String {
        format!("Hello, {}!", name)
    }
}

impl ToolDefinition for GreetTool {
    const NAME: &'static str = "greet";
    const DESCRIPTION: &'static str = "Returns a greeting for the given name.";

    type Params = GreetParams;

    fn execute(params: &GreetParams, _ctx: &ToolContext) -> CallToolResult {
        text_result(Self::greeting(&params.name))
    }
}
