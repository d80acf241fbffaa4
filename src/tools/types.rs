//! Core tool types.
//!
//! Defines the [`Tool`] trait that all scheduling tools implement and
//! [`ToolResult`] for capturing execution output.

/// Gating mode for tool availability.
///
/// `ReadOnly` exposes only the reference-data and lookup tools; `Full`
/// additionally exposes the scheduling mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    ReadOnly,
    Full,
}

/// Result of a tool execution.
///
/// Both outcomes are values, never unwinds: a failed result carries a short
/// message that is safe to relay to the caller-facing channel.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Output content relayed to the model.
    pub content: String,
    /// Error message if the tool execution failed.
    pub error: Option<String>,
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(content: String) -> Self {
        Self {
            success: true,
            content,
            error: None,
        }
    }

    /// Create a failed tool result with a caller-safe message.
    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(error),
        }
    }

    /// The text relayed to the model, whichever outcome occurred.
    pub fn relay_text(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.content)
    }
}

/// Errors from tool argument handling and execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Missing or malformed arguments from the model.
    #[error("invalid tool arguments: {0}")]
    Validation(String),

    /// The tool could not complete.
    #[error("tool execution failed: {0}")]
    Execution(String),
}

/// Core trait for LLM-invocable tools.
///
/// All tools must be `Send + Sync`. The trait provides metadata (name,
/// description, schema) and an execution method that accepts JSON arguments.
pub trait Tool: Send + Sync {
    /// Stable tool name (e.g. "schedule_appointment").
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does, surfaced to the
    /// model alongside the schema.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` for argument validation failures. Domain
    /// outcomes (a booked slot, a storage fault) are `Ok` results whose
    /// message is relayed to the model.
    fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError>;

    /// Whether this tool is allowed in the given mode.
    fn allowed_in_mode(&self, mode: ToolMode) -> bool;
}

/// Extract a required, non-empty string argument.
pub(crate) fn require_str_arg<'a>(
    args: &'a serde_json::Value,
    key: &str,
) -> Result<&'a str, ToolError> {
    let value = args
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::Validation(format!("missing required argument: {key}")))?;
    if value.trim().is_empty() {
        return Err(ToolError::Validation(format!("{key} must not be empty")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_result_success() {
        let result = ToolResult::success("booked".to_string());
        assert!(result.success);
        assert_eq!(result.content, "booked");
        assert!(result.error.is_none());
        assert_eq!(result.relay_text(), "booked");
    }

    #[test]
    fn tool_result_failure() {
        let result = ToolResult::failure("slot taken".to_string());
        assert!(!result.success);
        assert!(result.content.is_empty());
        assert_eq!(result.error, Some("slot taken".to_string()));
        assert_eq!(result.relay_text(), "slot taken");
    }

    #[test]
    fn require_str_arg_present() {
        let args = serde_json::json!({"patient_name": "John Doe"});
        assert_eq!(
            require_str_arg(&args, "patient_name").expect("present"),
            "John Doe"
        );
    }

    #[test]
    fn require_str_arg_missing() {
        let args = serde_json::json!({});
        let err = require_str_arg(&args, "patient_name").expect_err("missing");
        assert!(matches!(err, ToolError::Validation(_)));
        assert!(format!("{err}").contains("patient_name"));
    }

    #[test]
    fn require_str_arg_rejects_blank() {
        let args = serde_json::json!({"patient_name": "   "});
        assert!(require_str_arg(&args, "patient_name").is_err());
    }

    #[test]
    fn require_str_arg_rejects_non_string() {
        let args = serde_json::json!({"patient_name": 42});
        assert!(require_str_arg(&args, "patient_name").is_err());
    }

    // ── Trait bounds ──────────────────────────────────────────

    struct DummyTool;

    impl Tool for DummyTool {
        fn name(&self) -> &str {
            "dummy"
        }
        fn description(&self) -> &str {
            "A dummy tool for testing"
        }
        fn schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {}
            })
        }
        fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success("dummy output".to_string()))
        }
        fn allowed_in_mode(&self, _mode: ToolMode) -> bool {
            true
        }
    }

    #[test]
    fn tool_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DummyTool>();
    }

    #[test]
    fn dummy_tool_allowed_in_both_modes() {
        let tool = DummyTool;
        assert!(tool.allowed_in_mode(ToolMode::ReadOnly));
        assert!(tool.allowed_in_mode(ToolMode::Full));
    }
}
