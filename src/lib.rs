//! frontdesk: appointment scheduling core for a voice AI medical receptionist.
//!
//! The hosting voice framework owns speech-to-text, text-to-speech, turn
//! detection, and LLM inference. This crate owns the deterministic pieces
//! underneath a scheduling conversation:
//!
//! - [`store::AppointmentStore`] — a SQLite-backed appointment table with a
//!   double-booking guard.
//! - [`tools`] — the named operations the LLM may invoke during a call
//!   (roster, office hours, current time, scheduling, patient lookup).
//! - [`agent`] — system prompt assembly and per-worker setup, plus the
//!   transport capability flag the framework uses to pick its
//!   noise-suppression variant.

pub mod agent;
pub mod config;
pub mod error;
pub mod store;
pub mod tools;

pub use config::FrontdeskConfig;
pub use error::{FrontdeskError, Result};
pub use store::{Appointment, AppointmentStore, NewAppointment, StoreError};
pub use tools::{Tool, ToolMode, ToolRegistry, ToolResult};
