//! Tool operations exposed to the conversation LLM.
//!
//! Each tool is a named, typed operation the model may invoke during a call.
//! Results flow back as plain strings — a tool never lets an error object or
//! raw engine text cross into the model-facing channel.

mod current_time;
mod list_doctors;
mod office_hours;
mod patient_appointments;
mod registry;
mod schedule_appointment;
mod types;

pub use current_time::CurrentTimeTool;
pub use list_doctors::ListDoctorsTool;
pub use office_hours::OfficeHoursTool;
pub use patient_appointments::PatientAppointmentsTool;
pub use registry::ToolRegistry;
pub use schedule_appointment::ScheduleAppointmentTool;
pub use types::{Tool, ToolError, ToolMode, ToolResult};
