//! Appointment record types.

use serde::{Deserialize, Serialize};

/// Current schema version stamped into `schema_meta`.
pub(crate) const CURRENT_SCHEMA_VERSION: u32 = 1;

/// One persisted appointment row.
///
/// Rows are immutable once inserted: there is no cancel or reschedule
/// operation anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Engine-assigned row id, unique for the lifetime of the database.
    pub id: i64,
    /// Insertion timestamp, set by the storage engine.
    pub created_at: String,
    pub patient_name: String,
    pub doctor_name: String,
    /// Appointment slot as a sortable `YYYY-MM-DD HH:MM:SS` string.
    ///
    /// Compared lexicographically against `datetime('now')` for the
    /// future-only filter, so zero padding matters.
    pub scheduled_at: String,
    pub summary: Option<String>,
    pub appointment_notes: String,
}

impl Appointment {
    /// One-line description suitable for relaying to the caller.
    pub fn describe(&self) -> String {
        let summary = self.summary.as_deref().unwrap_or("no summary");
        if self.appointment_notes.is_empty() {
            format!(
                "#{id} {at} with {doctor} for {patient}: {summary}",
                id = self.id,
                at = self.scheduled_at,
                doctor = self.doctor_name,
                patient = self.patient_name,
            )
        } else {
            format!(
                "#{id} {at} with {doctor} for {patient}: {summary} ({notes})",
                id = self.id,
                at = self.scheduled_at,
                doctor = self.doctor_name,
                patient = self.patient_name,
                notes = self.appointment_notes,
            )
        }
    }
}

/// Parameters for inserting a new appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment<'a> {
    pub patient_name: &'a str,
    pub doctor_name: &'a str,
    pub scheduled_at: &'a str,
    pub summary: &'a str,
    pub notes: &'a str,
}

impl<'a> NewAppointment<'a> {
    /// New appointment with empty notes.
    pub fn new(
        patient_name: &'a str,
        doctor_name: &'a str,
        scheduled_at: &'a str,
        summary: &'a str,
    ) -> Self {
        Self {
            patient_name,
            doctor_name,
            scheduled_at,
            summary,
            notes: "",
        }
    }
}
