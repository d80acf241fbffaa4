//! Appointment persistence.
//!
//! A single SQLite table owned by [`AppointmentStore`]. The store enforces
//! exactly one scheduling invariant — no two appointments may share a
//! `(doctor_name, scheduled_at)` pair — and leaves domain validation
//! (office hours, half-hour increments, future-dated) to the conversation
//! layer.

mod schema;
mod sqlite;
mod types;

pub use sqlite::{AppointmentStore, StoreError};
pub use types::{Appointment, NewAppointment};
