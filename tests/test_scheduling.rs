//! End-to-end scheduling tests: config → store → registry → tool dispatch.
//!
//! Exercises the same path the hosting framework drives during a call,
//! minus speech and LLM inference.

use std::sync::Arc;

use frontdesk::agent::{build_registry, prewarm, system_prompt};
use frontdesk::config::FrontdeskConfig;
use frontdesk::store::{AppointmentStore, NewAppointment};
use frontdesk::tools::ToolRegistry;

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

fn setup() -> (tempfile::TempDir, Arc<AppointmentStore>, ToolRegistry) {
    init_tracing();
    let dir = tempfile::TempDir::new().expect("temp dir");
    let store = Arc::new(AppointmentStore::open(dir.path()).expect("open store"));
    prewarm(&store).expect("prewarm");
    let registry = build_registry(&store, &FrontdeskConfig::default());
    (dir, store, registry)
}

#[test]
fn schedules_john_doe_then_rejects_the_same_slot() {
    let (_dir, store, registry) = setup();

    let result = registry.dispatch(
        "schedule_appointment",
        serde_json::json!({
            "patient_name": "John Doe",
            "doctor_name": "Dr. Smith",
            "scheduled_at": "2025-03-05 09:00:00",
            "summary": "checkup"
        }),
    );
    assert!(result.success, "{:?}", result.error);
    assert!(result.content.contains("John Doe"));

    // Immediate second booking for the same doctor/time, any patient.
    let second = registry.dispatch(
        "schedule_appointment",
        serde_json::json!({
            "patient_name": "Jane Doe",
            "doctor_name": "Dr. Smith",
            "scheduled_at": "2025-03-05 09:00:00",
            "summary": "follow-up"
        }),
    );
    assert!(!second.success);
    assert!(second.relay_text().contains("different time"));

    // Row count for that slot stayed at 1.
    let all = store.list_all().expect("list_all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].patient_name, "John Doe");
}

#[test]
fn scheduled_appointment_shows_up_in_patient_lookup() {
    let (_dir, _store, registry) = setup();

    registry.dispatch(
        "schedule_appointment",
        serde_json::json!({
            "patient_name": "John Doe",
            "doctor_name": "Dr. Williams",
            "scheduled_at": "2025-04-10 14:30:00",
            "summary": "allergy review"
        }),
    );

    let lookup = registry.dispatch(
        "get_patient_appointments",
        serde_json::json!({"patient_name": "John Doe"}),
    );
    assert!(lookup.success);
    assert!(lookup.content.contains("Dr. Williams"));
    assert!(lookup.content.contains("2025-04-10 14:30:00"));
    assert!(lookup.content.contains("allergy review"));
}

#[test]
fn patient_lookup_on_empty_store_is_a_message() {
    let (_dir, _store, registry) = setup();

    let lookup = registry.dispatch(
        "get_patient_appointments",
        serde_json::json!({"patient_name": "Jane Doe"}),
    );
    assert!(lookup.success);
    assert!(lookup.content.contains("No appointments found"));
}

#[test]
fn future_only_lookup_excludes_past_rows() {
    let (_dir, store, registry) = setup();

    store
        .insert(&NewAppointment::new(
            "John Doe",
            "Dr. Smith",
            "2000-01-01 09:00:00",
            "ancient history",
        ))
        .expect("past row");
    store
        .insert(&NewAppointment::new(
            "John Doe",
            "Dr. Smith",
            "2999-01-01 09:00:00",
            "far future",
        ))
        .expect("future row");

    let lookup = registry.dispatch(
        "get_patient_appointments",
        serde_json::json!({"patient_name": "John Doe", "future_only": true}),
    );
    assert!(lookup.content.contains("far future"));
    assert!(!lookup.content.contains("ancient history"));
}

#[test]
fn reference_tools_report_configured_data() {
    let (_dir, _store, registry) = setup();

    let doctors = registry.dispatch("list_doctors", serde_json::json!({}));
    assert!(doctors.success);
    assert!(doctors.content.contains("Dr. Smith"));
    assert!(doctors.content.contains("Dr. Williams"));
    assert!(doctors.content.contains("Dr. Brown"));

    let hours = registry.dispatch("get_office_hours", serde_json::json!({}));
    assert!(hours.success);
    assert!(hours.content.contains("Monday - Friday: 9:00 AM - 5:00 PM"));
}

#[test]
fn current_datetime_has_sortable_format() {
    let (_dir, _store, registry) = setup();

    let now = registry.dispatch("get_current_datetime", serde_json::json!({}));
    assert!(now.success);

    let bytes = now.content.as_bytes();
    assert!(bytes.len() >= 19, "too short: {}", now.content);
    for &i in &[0usize, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18] {
        assert!(bytes[i].is_ascii_digit(), "bad char at {i}: {}", now.content);
    }
    assert_eq!(bytes[4], b'-');
    assert_eq!(bytes[7], b'-');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
    assert_eq!(bytes[16], b':');
}

#[test]
fn restart_preserves_appointments() {
    init_tracing();
    let dir = tempfile::TempDir::new().expect("temp dir");

    {
        let store = AppointmentStore::open(dir.path()).expect("first open");
        store
            .insert(&NewAppointment::new(
                "John Doe",
                "Dr. Smith",
                "2025-03-05 09:00:00",
                "checkup",
            ))
            .expect("insert");
    }

    // Second worker startup against the same datastore.
    let store = AppointmentStore::open(dir.path()).expect("second open");
    prewarm(&store).expect("prewarm");
    let rows = store.list_by_patient("John Doe", false).expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].scheduled_at, "2025-03-05 09:00:00");
}

#[test]
fn tool_schemas_are_exported_for_the_llm() {
    let (_dir, _store, registry) = setup();

    let schemas = registry.schemas_for_api();
    assert_eq!(schemas.len(), 5);
    for schema in &schemas {
        assert!(schema.get("name").is_some());
        assert!(schema.get("description").is_some());
        assert!(schema.get("parameters").is_some());
    }
}

#[test]
fn prompt_mentions_practice_from_config() {
    let config: FrontdeskConfig = toml::from_str(
        r#"
        [practice]
        name = "Harbour Clinic"
        "#,
    )
    .expect("parse");
    assert!(system_prompt(&config).contains("Harbour Clinic"));
}
