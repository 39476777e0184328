//! Tool-specific error types.

use serde_json::{Value, json};
use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// The first four variants are the caller-facing failures of the tool
/// catalogue. They never abort a call; the response layer turns them into an
/// error descriptor (see [`ToolError::descriptor`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// A required argument was missing or blank.
    #[error("{0} must be provided")]
    MissingArgument(String),

    /// A date argument did not parse as `YYYY-MM-DD`.
    #[error("Invalid date format for {argument}: '{value}'. Use YYYY-MM-DD (e.g. 2024-03-15)")]
    InvalidDate { argument: String, value: String },

    /// The check-out date lies before the check-in date.
    #[error("Check-out date {check_out} cannot be before check-in date {check_in}")]
    InvalidDateRange { check_in: String, check_out: String },

    /// An enumerated argument had a value outside its allowed set.
    #[error("Invalid {argument} '{value}'. Allowed values: {allowed}")]
    InvalidChoice {
        argument: String,
        value: String,
        allowed: String,
    },

    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Arguments could not be decoded into the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "missing argument" error.
    pub fn missing_argument(what: impl Into<String>) -> Self {
        Self::MissingArgument(what.into())
    }

    /// Create a new "invalid date" error.
    pub fn invalid_date(argument: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            argument: argument.into(),
            value: value.into(),
        }
    }

    /// Create a new "invalid choice" error.
    pub fn invalid_choice(
        argument: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidChoice {
            argument: argument.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// The `{"error": "..."}` object agents expect in place of a record.
    pub fn descriptor(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
