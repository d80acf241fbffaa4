//! Error types for the frontdesk core.

use crate::store::StoreError;
use crate::tools::ToolError;

/// Top-level error type for the scheduling core.
#[derive(Debug, thiserror::Error)]
pub enum FrontdeskError {
    /// Configuration loading or parsing error.
    #[error("config error: {0}")]
    Config(String),

    /// Appointment store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Tool argument or execution error.
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, FrontdeskError>;
