//! Current date/time tool.
//!
//! Read-only tool the model uses to resolve relative dates ("tomorrow",
//! "next Wednesday"). Output is the sortable `YYYY-MM-DD HH:MM:SS` form the
//! store uses for slots, optionally followed by the weekday name.

use chrono::Local;

use super::types::{Tool, ToolError, ToolMode, ToolResult};

/// Tool that reports the current wall-clock date and time.
pub struct CurrentTimeTool {
    include_weekday: bool,
}

impl CurrentTimeTool {
    /// Create the tool; `include_weekday` appends e.g. " Wednesday".
    pub fn new(include_weekday: bool) -> Self {
        Self { include_weekday }
    }

    fn now_string(&self) -> String {
        let now = Local::now();
        if self.include_weekday {
            // %A is the full weekday name.
            now.format("%Y-%m-%d %H:%M:%S %A").to_string()
        } else {
            now.format("%Y-%m-%d %H:%M:%S").to_string()
        }
    }
}

impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "get_current_datetime"
    }

    fn description(&self) -> &str {
        "Get the current date and time, for resolving relative requests like \
         'tomorrow', 'next week', or 'in an hour'. Returns 'YYYY-MM-DD HH:MM:SS' \
         followed by the day of the week."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::success(self.now_string()))
    }

    fn allowed_in_mode(&self, _mode: ToolMode) -> bool {
        true // read-only
    }
}
