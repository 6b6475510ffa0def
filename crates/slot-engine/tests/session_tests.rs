//! Tests for the load-once configuration session.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use slot_engine::error::Result;
use slot_engine::session::{JsonSource, StaticSource};
use slot_engine::{CalendarConfig, ConfigSource, Session, SlotError};

const CONFIG: &str = r#"{
    "calendar": { "timeZone": "Europe/Amsterdam", "id": "practice@example.com" },
    "openingHours": [
        { "open": null, "closed": null },
        { "open": "09:00", "closed": "17:00" },
        { "open": "09:00", "closed": "17:00" },
        { "open": "09:00", "closed": "17:00" },
        { "open": "09:00", "closed": "17:00" },
        { "open": "09:00", "closed": "17:00" },
        { "open": null, "closed": null }
    ]
}"#;

/// Counts loads and fails the first `failures` of them.
struct CountingSource {
    loads: AtomicUsize,
    failures: usize,
}

impl CountingSource {
    fn new(failures: usize) -> Self {
        Self {
            loads: AtomicUsize::new(0),
            failures,
        }
    }
}

impl ConfigSource for CountingSource {
    fn load(&self) -> Result<CalendarConfig> {
        let n = self.loads.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            return Err(SlotError::ConfigSource("datastore unavailable".to_string()));
        }
        CalendarConfig::from_json(CONFIG)
    }
}

#[test]
fn source_is_loaded_once() {
    let session = Session::new(CountingSource::new(0));

    let a = session.config().unwrap();
    let b = session.config().unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(session.source().loads.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_load_is_retried_on_next_access() {
    let session = Session::new(CountingSource::new(1));

    assert!(session.config().is_err());
    assert!(session.config().is_ok());
    assert_eq!(session.source().loads.load(Ordering::SeqCst), 2);
}

#[test]
fn invalidate_forces_a_reload() {
    let session = Session::new(CountingSource::new(0));

    session.config().unwrap();
    session.invalidate();
    session.config().unwrap();

    assert_eq!(session.source().loads.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_access_loads_once() {
    let session = Arc::new(Session::new(CountingSource::new(0)));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = Arc::clone(&session);
            std::thread::spawn(move || session.config().unwrap().calendar_id.clone())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "practice@example.com");
    }

    assert_eq!(session.source().loads.load(Ordering::SeqCst), 1);
}

#[test]
fn json_and_static_sources_agree() {
    let from_json = Session::new(JsonSource(CONFIG.to_string())).config().unwrap();
    let from_value = Session::new(StaticSource(CalendarConfig::from_json(CONFIG).unwrap()))
        .config()
        .unwrap();

    assert_eq!(*from_json, *from_value);
}

#[test]
fn invalid_document_surfaces_as_config_error() {
    let session = Session::new(JsonSource("{}".to_string()));

    assert!(matches!(session.config(), Err(SlotError::Config(_))));
}

#[test]
fn invalid_timezone_keeps_its_error_kind_through_the_session() {
    let session = Session::new(JsonSource(CONFIG.replace("Europe/Amsterdam", "Nowhere/Atlantis")));

    assert!(matches!(session.config(), Err(SlotError::InvalidTimezone(_))));
}
