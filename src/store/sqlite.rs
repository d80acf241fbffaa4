//! SQLite-backed appointment store.
//!
//! Backed by a single SQLite database file at `{root_dir}/scheduler.db`.
//! Every mutating operation returns a discriminated result — the conflict
//! outcome is a distinct error variant so the tool layer can decide between
//! "ask the caller for a different time" and "log and apologize".

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{Connection, params};

use super::schema::{apply_schema, read_schema_version};
use super::types::{Appointment, NewAppointment};

/// Database filename within the storage root directory.
const DB_FILENAME: &str = "scheduler.db";

/// Column list shared by every SELECT, in `row_to_appointment` order.
const APPOINTMENT_COLS: &str =
    "id, created_at, patient_name, doctor_name, scheduled_at, summary, appointment_notes";

/// SQLite-backed appointment store.
///
/// Thread-safe via an internal `Mutex<Connection>`. All writes are
/// serialized; across processes, WAL mode lets readers proceed during
/// writes and the engine's own locking arbitrates writers.
pub struct AppointmentStore {
    root: PathBuf,
    conn: Mutex<Connection>,
}

impl AppointmentStore {
    /// Open (or create) the SQLite database at `{root_dir}/scheduler.db`.
    ///
    /// Applies the schema if the database is new. A permissions or disk
    /// failure here is fatal and should abort worker startup.
    pub fn open(root_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(root_dir).map_err(|e| StoreError::Io(e.to_string()))?;
        let db_path = root_dir.join(DB_FILENAME);
        let conn = Connection::open(&db_path).map_err(StoreError::Sqlite)?;
        apply_schema(&conn).map_err(StoreError::Sqlite)?;
        tracing::info!(path = %db_path.display(), "appointment store opened");
        Ok(Self {
            root: root_dir.to_path_buf(),
            conn: Mutex::new(conn),
        })
    }

    /// Returns the storage root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Idempotent schema application.
    ///
    /// Safe to call on every process startup; never drops or alters
    /// existing rows.
    pub fn ensure_layout(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        apply_schema(&conn).map_err(StoreError::Sqlite)
    }

    /// Read the current schema version from the database.
    pub fn schema_version(&self) -> Result<Option<u32>, StoreError> {
        let conn = self.lock()?;
        read_schema_version(&conn).map_err(StoreError::Sqlite)
    }

    /// Returns true iff the doctor already has an appointment at the given
    /// time (exact string equality on the stored representation).
    ///
    /// Best-effort pre-check only: it does not reserve the slot. The unique
    /// index on `(doctor_name, scheduled_at)` covers the window between
    /// check and insert.
    pub fn has_conflict(&self, doctor_name: &str, scheduled_at: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        count_at_slot(&conn, doctor_name, scheduled_at).map(|n| n > 0)
    }

    /// Insert a new appointment and return the full persisted record.
    ///
    /// Fails with [`StoreError::Conflict`] when the slot is already booked,
    /// whether caught by the pre-check or by the engine's unique index.
    /// The store performs no domain validation (office hours, granularity,
    /// roster membership) — that is the conversation layer's concern.
    pub fn insert(&self, new: &NewAppointment<'_>) -> Result<Appointment, StoreError> {
        let conn = self.lock()?;

        if count_at_slot(&conn, new.doctor_name, new.scheduled_at)? > 0 {
            return Err(StoreError::Conflict(conflict_message(
                new.doctor_name,
                new.scheduled_at,
            )));
        }

        let inserted = conn.execute(
            "INSERT INTO appointments \
             (patient_name, doctor_name, scheduled_at, summary, appointment_notes) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                new.patient_name,
                new.doctor_name,
                new.scheduled_at,
                new.summary,
                new.notes
            ],
        );
        match inserted {
            Ok(_) => {}
            // A concurrent writer won the slot between check and insert.
            Err(e) if is_slot_violation(&e) => {
                return Err(StoreError::Conflict(conflict_message(
                    new.doctor_name,
                    new.scheduled_at,
                )));
            }
            Err(e) => return Err(StoreError::Sqlite(e)),
        }

        let id = conn.last_insert_rowid();
        let appt = conn
            .query_row(
                &format!("SELECT {APPOINTMENT_COLS} FROM appointments WHERE id = ?1"),
                params![id],
                row_to_appointment,
            )
            .map_err(StoreError::Sqlite)?;
        tracing::debug!(id = appt.id, doctor = %appt.doctor_name, at = %appt.scheduled_at, "appointment inserted");
        Ok(appt)
    }

    /// List every stored appointment, ordered by slot time.
    pub fn list_all(&self) -> Result<Vec<Appointment>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {APPOINTMENT_COLS} FROM appointments ORDER BY scheduled_at, doctor_name"
            ))
            .map_err(StoreError::Sqlite)?;
        let rows = stmt
            .query_map([], row_to_appointment)
            .map_err(StoreError::Sqlite)?;

        let mut appointments = Vec::new();
        for r in rows {
            appointments.push(r.map_err(StoreError::Sqlite)?);
        }
        Ok(appointments)
    }

    /// List appointments for a patient (exact, case-sensitive name match).
    ///
    /// With `future_only`, keeps only rows whose `scheduled_at` sorts after
    /// `datetime('now')` as computed by the storage engine at query time —
    /// the engine's clock, not the caller's.
    pub fn list_by_patient(
        &self,
        patient_name: &str,
        future_only: bool,
    ) -> Result<Vec<Appointment>, StoreError> {
        let conn = self.lock()?;
        let sql = if future_only {
            format!(
                "SELECT {APPOINTMENT_COLS} FROM appointments \
                 WHERE patient_name = ?1 AND scheduled_at > datetime('now') \
                 ORDER BY scheduled_at"
            )
        } else {
            format!(
                "SELECT {APPOINTMENT_COLS} FROM appointments \
                 WHERE patient_name = ?1 ORDER BY scheduled_at"
            )
        };
        let mut stmt = conn.prepare(&sql).map_err(StoreError::Sqlite)?;
        let rows = stmt
            .query_map(params![patient_name], row_to_appointment)
            .map_err(StoreError::Sqlite)?;

        let mut appointments = Vec::new();
        for r in rows {
            appointments.push(r.map_err(StoreError::Sqlite)?);
        }
        Ok(appointments)
    }

    /// Acquire the connection mutex.
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from the appointment store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slot is already booked. Recoverable: the caller picks another
    /// time. The message is safe to relay to the end user.
    #[error("scheduling conflict: {0}")]
    Conflict(String),

    /// Underlying datastore failure. Logged with detail; surfaced to the
    /// end user only as a generic apology.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

impl StoreError {
    /// True for the recoverable "pick another time" outcome.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn conflict_message(doctor_name: &str, scheduled_at: &str) -> String {
    format!("{doctor_name} already has an appointment at {scheduled_at}; ask the caller to pick a different time")
}

fn count_at_slot(
    conn: &Connection,
    doctor_name: &str,
    scheduled_at: &str,
) -> Result<i64, StoreError> {
    conn.query_row(
        "SELECT COUNT(*) FROM appointments WHERE scheduled_at = ?1 AND doctor_name = ?2",
        params![scheduled_at, doctor_name],
        |row| row.get(0),
    )
    .map_err(StoreError::Sqlite)
}

/// True when the error is a unique-index violation on the booking slot.
fn is_slot_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, Some(msg)) => {
            e.code == rusqlite::ErrorCode::ConstraintViolation
                && msg.contains("appointments.doctor_name")
        }
        _ => false,
    }
}

fn row_to_appointment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        created_at: row.get(1)?,
        patient_name: row.get(2)?,
        doctor_name: row.get(3)?,
        scheduled_at: row.get(4)?,
        summary: row.get(5)?,
        appointment_notes: row.get(6)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
