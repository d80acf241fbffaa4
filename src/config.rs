//! Configuration types for the scheduling core.
//!
//! The doctor roster and office hours are practice-specific data, not logic,
//! so they live here rather than as literals inside the tools that report
//! them. Defaults mirror the Robot Medical Group deployment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FrontdeskError, Result};

/// Top-level configuration for the scheduling core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontdeskConfig {
    /// Practice reference data (name, roster, office hours).
    pub practice: PracticeConfig,
    /// Appointment datastore settings.
    pub storage: StorageConfig,
    /// Wall-clock reporting settings.
    pub clock: ClockConfig,
}

impl FrontdeskConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing sections fall back to their defaults via `#[serde(default)]`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| FrontdeskError::Config(format!("failed to parse {}: {e}", path.display())))
    }
}

/// Practice reference data returned verbatim by the read-only tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    /// Practice name, interpolated into the system prompt.
    pub name: String,
    /// Doctors available for appointments.
    pub doctors: Vec<String>,
    /// Human-readable office-hour ranges.
    pub office_hours: Vec<String>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            name: "Robot Medical Group".to_owned(),
            doctors: vec![
                "Dr. Smith".to_owned(),
                "Dr. Williams".to_owned(),
                "Dr. Brown".to_owned(),
            ],
            office_hours: vec![
                "Monday - Friday: 9:00 AM - 5:00 PM".to_owned(),
                "Saturday - Sunday: 10:00 AM - 4:00 PM".to_owned(),
            ],
        }
    }
}

/// Appointment datastore settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the SQLite database file.
    ///
    /// `None` resolves to the platform data directory.
    pub root_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the datastore root, falling back to the platform default.
    pub fn resolve_root(&self) -> PathBuf {
        self.root_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Default datastore location: `{platform data dir}/frontdesk`.
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("frontdesk")
}

/// Wall-clock reporting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Append the weekday name to the current date/time tool output.
    ///
    /// The weekday helps the model resolve relative dates ("next Wednesday").
    pub include_weekday: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            include_weekday: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_has_three_doctors() {
        let config = FrontdeskConfig::default();
        assert_eq!(config.practice.doctors.len(), 3);
        assert!(config.practice.doctors.contains(&"Dr. Smith".to_owned()));
    }

    #[test]
    fn default_office_hours_cover_week() {
        let config = FrontdeskConfig::default();
        assert_eq!(config.practice.office_hours.len(), 2);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: FrontdeskConfig = toml::from_str(
            r#"
            [practice]
            name = "Harbour Clinic"
            "#,
        )
        .expect("parse");
        assert_eq!(config.practice.name, "Harbour Clinic");
        // Unspecified fields keep their defaults.
        assert!(config.clock.include_weekday);
        assert!(config.storage.root_dir.is_none());
    }

    #[test]
    fn storage_root_override_wins() {
        let config: FrontdeskConfig = toml::from_str(
            r#"
            [storage]
            root_dir = "/var/lib/frontdesk"
            "#,
        )
        .expect("parse");
        assert_eq!(
            config.storage.resolve_root(),
            PathBuf::from("/var/lib/frontdesk")
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = FrontdeskConfig::load(Path::new("/nonexistent/frontdesk.toml"));
        assert!(matches!(err, Err(FrontdeskError::Io(_))));
    }

    #[test]
    fn load_bad_toml_is_config_error() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("frontdesk.toml");
        std::fs::write(&path, "practice = 12").expect("write");
        let err = FrontdeskConfig::load(&path);
        assert!(matches!(err, Err(FrontdeskError::Config(_))));
    }
}
