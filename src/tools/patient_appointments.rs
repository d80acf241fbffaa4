//! Patient appointment lookup tool.
//!
//! Read-only tool listing a patient's appointments by exact name match.
//! No identity verification happens anywhere in the system; the stated name
//! is trusted.

use std::sync::Arc;

use crate::store::AppointmentStore;

use super::types::{Tool, ToolError, ToolMode, ToolResult, require_str_arg};

/// Tool that lists all appointments for a patient.
///
/// # Arguments (JSON)
///
/// - `patient_name` (string, required) — exact name used when booking
/// - `future_only` (boolean, optional, default false) — keep only
///   appointments later than the datastore's current time
pub struct PatientAppointmentsTool {
    store: Arc<AppointmentStore>,
}

impl PatientAppointmentsTool {
    /// Create the tool over a shared store handle.
    pub fn new(store: Arc<AppointmentStore>) -> Self {
        Self { store }
    }
}

impl Tool for PatientAppointmentsTool {
    fn name(&self) -> &str {
        "get_patient_appointments"
    }

    fn description(&self) -> &str {
        "Get all appointments for a patient by name. Optionally restrict to \
         upcoming appointments only."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "patient_name": {
                    "type": "string",
                    "description": "The name of the patient"
                },
                "future_only": {
                    "type": "boolean",
                    "description": "If true, only appointments later than now (default: false)"
                }
            },
            "required": ["patient_name"]
        })
    }

    fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let patient_name = require_str_arg(&args, "patient_name")?;
        let future_only = args
            .get("future_only")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let appointments = match self.store.list_by_patient(patient_name, future_only) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, "failed to list patient appointments");
                return Ok(ToolResult::failure(
                    "The scheduling system could not look up appointments right now."
                        .to_owned(),
                ));
            }
        };

        if appointments.is_empty() {
            return Ok(ToolResult::success(format!(
                "No appointments found for {patient_name}."
            )));
        }

        let mut lines = Vec::with_capacity(appointments.len() + 1);
        lines.push(format!(
            "Appointments for {patient_name} ({} total):",
            appointments.len()
        ));
        for appt in &appointments {
            lines.push(format!("- {}", appt.describe()));
        }
        Ok(ToolResult::success(lines.join("\n")))
    }

    fn allowed_in_mode(&self, _mode: ToolMode) -> bool {
        true // read-only
    }
}
