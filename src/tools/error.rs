// src/tools/error.rs

use thiserror::Error;

/// Everything that can go wrong between receiving a tool call and producing
/// its content. The dispatcher turns each variant into an `isError` result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
    #[error("{0}")]
    HandlerFault(String),
}

impl ToolError {
    pub fn missing(field: &str) -> Self {
        ToolError::InvalidArgument {
            field: field.to_string(),
            reason: format!("missing required field '{}'", field),
        }
    }

    pub fn wrong_type(field: &str, expected: &str) -> Self {
        ToolError::InvalidArgument {
            field: field.to_string(),
            reason: format!("expected {}", expected),
        }
    }

    pub fn not_allowed(field: &str, value: &str, allowed: &[&str]) -> Self {
        ToolError::InvalidArgument {
            field: field.to_string(),
            reason: format!(
                "value '{}' is not allowed; expected one of: {}",
                value,
                allowed.join(", ")
            ),
        }
    }
}
