//! Port fakes and router helpers for handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use axum::Router;
use axum::response::Response;
use chrono::TimeZone;

use pantry_app::ports::{Clock, KeyValueStore, ReportSink};
use pantry_app::services::inventory_service::InventoryService;
use pantry_domain::error::PantryError;
use pantry_domain::time::Timestamp;

use crate::router;
use crate::state::AppState;

#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for InMemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, PantryError> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<(), PantryError> {
        self.records.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2029, 12, 31, 0, 0, 0).unwrap()
    }
}

pub struct MemorySink;

impl ReportSink for MemorySink {
    async fn publish(&self, _report: String) -> Result<String, PantryError> {
        Ok("memory://report.txt".to_string())
    }
}

pub struct FailingSink;

impl ReportSink for FailingSink {
    async fn publish(&self, _report: String) -> Result<String, PantryError> {
        Err(PantryError::Export("read-only filesystem".into()))
    }
}

pub fn app() -> Router {
    let service = InventoryService::new(InMemoryStore::default(), FixedClock, MemorySink);
    router::build(AppState::new(service))
}

pub fn failing_sink_app() -> Router {
    let service = InventoryService::new(InMemoryStore::default(), FixedClock, FailingSink);
    router::build(AppState::new(service))
}

/// App whose collection holds a valid `milk` item and an `eggs` item with an
/// unparseable date.
pub async fn seeded_app() -> Router {
    let store = InMemoryStore::default();
    store
        .write(
            "products",
            r#"[
                {"id":"milk","name":"Milk","expiryDate":"01/01/2030","quantity":2},
                {"id":"eggs","name":"Eggs","expiryDate":"soon","quantity":12}
            ]"#
            .to_string(),
        )
        .await
        .unwrap();
    let service = InventoryService::new(store, FixedClock, MemorySink);
    router::build(AppState::new(service))
}

pub async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(resp).await).unwrap()
}
