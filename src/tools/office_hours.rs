//! Office hours tool.
//!
//! Read-only tool returning the practice's human-readable opening hours.
//! The model consults these before confirming a slot; the store itself does
//! not enforce them.

use super::types::{Tool, ToolError, ToolMode, ToolResult};

/// Tool that reports the practice's office hours.
pub struct OfficeHoursTool {
    hours: Vec<String>,
}

impl OfficeHoursTool {
    /// Create the tool over the configured hour ranges.
    pub fn new(hours: Vec<String>) -> Self {
        Self { hours }
    }
}

impl Tool for OfficeHoursTool {
    fn name(&self) -> &str {
        "get_office_hours"
    }

    fn description(&self) -> &str {
        "Get the office hours of the medical practice. Appointments must fall within these hours."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::success(self.hours.join("\n")))
    }

    fn allowed_in_mode(&self, _mode: ToolMode) -> bool {
        true // read-only
    }
}
