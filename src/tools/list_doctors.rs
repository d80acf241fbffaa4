//! Doctor roster tool.
//!
//! Read-only tool returning the doctors available for appointments. The
//! roster is configuration (practice-specific data), captured at registry
//! construction.

use super::types::{Tool, ToolError, ToolMode, ToolResult};

/// Tool that lists the doctors available for appointments.
pub struct ListDoctorsTool {
    doctors: Vec<String>,
}

impl ListDoctorsTool {
    /// Create the tool over the configured roster.
    pub fn new(doctors: Vec<String>) -> Self {
        Self { doctors }
    }
}

impl Tool for ListDoctorsTool {
    fn name(&self) -> &str {
        "list_doctors"
    }

    fn description(&self) -> &str {
        "Get the list of doctors available for appointments. Only these doctors can be booked."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
        if self.doctors.is_empty() {
            return Ok(ToolResult::success(
                "No doctors are currently accepting appointments.".to_owned(),
            ));
        }
        Ok(ToolResult::success(self.doctors.join("\n")))
    }

    fn allowed_in_mode(&self, _mode: ToolMode) -> bool {
        true // read-only
    }
}
