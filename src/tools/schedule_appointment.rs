//! Appointment scheduling tool.
//!
//! The one mutation tool. Delegates to [`AppointmentStore::insert`] and maps
//! the store's discriminated result into caller-safe text: a booked slot
//! becomes a "pick a different time" message, a storage fault is logged in
//! full and surfaced only as a generic apology.

use std::sync::Arc;

use crate::store::{AppointmentStore, NewAppointment};

use super::types::{Tool, ToolError, ToolMode, ToolResult, require_str_arg};

/// Tool that schedules a new appointment for a patient.
///
/// # Arguments (JSON)
///
/// - `patient_name` (string, required)
/// - `doctor_name` (string, required)
/// - `scheduled_at` (string, required) — `YYYY-MM-DD HH:MM:SS`
/// - `summary` (string, required) — brief reason for the visit
/// - `notes` (string, optional) — extra notes kept on the record
pub struct ScheduleAppointmentTool {
    store: Arc<AppointmentStore>,
}

impl ScheduleAppointmentTool {
    /// Create the tool over a shared store handle.
    pub fn new(store: Arc<AppointmentStore>) -> Self {
        Self { store }
    }
}

impl Tool for ScheduleAppointmentTool {
    fn name(&self) -> &str {
        "schedule_appointment"
    }

    fn description(&self) -> &str {
        "Schedule a new appointment for a patient with a doctor at a specific \
         date and time. Fails if the doctor already has an appointment at that time."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "patient_name": {
                    "type": "string",
                    "description": "The name of the patient"
                },
                "doctor_name": {
                    "type": "string",
                    "description": "The name of the doctor"
                },
                "scheduled_at": {
                    "type": "string",
                    "description": "The date and time of the appointment in YYYY-MM-DD HH:MM:SS format"
                },
                "summary": {
                    "type": "string",
                    "description": "A brief summary of the appointment"
                },
                "notes": {
                    "type": "string",
                    "description": "Optional notes to keep on the appointment record"
                }
            },
            "required": ["patient_name", "doctor_name", "scheduled_at", "summary"]
        })
    }

    fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let patient_name = require_str_arg(&args, "patient_name")?;
        let doctor_name = require_str_arg(&args, "doctor_name")?;
        let scheduled_at = require_str_arg(&args, "scheduled_at")?;
        let summary = require_str_arg(&args, "summary")?;
        let notes = args.get("notes").and_then(|v| v.as_str()).unwrap_or("");

        let new = NewAppointment {
            patient_name,
            doctor_name,
            scheduled_at,
            summary,
            notes,
        };

        match self.store.insert(&new) {
            Ok(appt) => Ok(ToolResult::success(format!(
                "Appointment confirmed: {}",
                appt.describe()
            ))),
            Err(e) if e.is_conflict() => Ok(ToolResult::failure(format!(
                "{doctor_name} is already booked at {scheduled_at}. \
                 Ask the caller to pick a different time."
            ))),
            Err(e) => {
                tracing::error!(error = %e, "failed to insert appointment");
                Ok(ToolResult::failure(
                    "The scheduling system could not save the appointment. \
                     Apologize and ask the caller to try again shortly."
                        .to_owned(),
                ))
            }
        }
    }

    fn allowed_in_mode(&self, mode: ToolMode) -> bool {
        mode == ToolMode::Full
    }
}
