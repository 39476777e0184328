//! Response helpers shared by every tool.
//!
//! Tool operations return `Result<T, ToolError>`. These helpers serialize the
//! outcome into a `CallToolResult` whose text content is the JSON payload. A
//! failure keeps the shape of a success (a one-element list or a single
//! object carrying an `error` field) and is flagged with `isError`.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::error::ToolError;

/// Result for tools that answer with a list of records.
pub fn list_result<T: Serialize>(outcome: Result<Vec<T>, ToolError>) -> CallToolResult {
    match outcome {
        Ok(items) => value_result(&items),
        Err(e) => error_result(Value::Array(vec![e.descriptor()]), &e),
    }
}

/// Result for tools that answer with a single record.
pub fn record_result<T: Serialize>(outcome: Result<T, ToolError>) -> CallToolResult {
    match outcome {
        Ok(record) => value_result(&record),
        Err(e) => error_result(e.descriptor(), &e),
    }
}

/// Successful result carrying any serializable value.
pub fn value_result<T: Serialize + ?Sized>(value: &T) -> CallToolResult {
    match serde_json::to_value(value) {
        Ok(payload) => payload_result(payload, false),
        Err(e) => {
            warn!("Failed to serialize tool response: {}", e);
            CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize tool response: {}",
                e
            ))])
        }
    }
}

/// Successful result carrying plain text.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn error_result(descriptor: Value, error: &ToolError) -> CallToolResult {
    warn!("{}", error);
    payload_result(descriptor, true)
}

fn payload_result(payload: Value, is_error: bool) -> CallToolResult {
    // structuredContent must be a JSON object; lists only travel as text.
    let structured_content = payload.is_object().then(|| payload.clone());

    CallToolResult {
        content: vec![Content::text(payload.to_string())],
        structured_content,
        is_error: Some(is_error),
        meta: None,
    }
}

/// Parse the JSON payload back out of a tool result.
#[cfg(test)]
pub(crate) fn payload(result: &CallToolResult) -> Value {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => {
            serde_json::from_str(&text.text).expect("tool payload should be JSON")
        }
        _ => panic!("Expected text content"),
    }
}

/// The raw text of a tool result.
#[cfg(test)]
pub(crate) fn text(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}
