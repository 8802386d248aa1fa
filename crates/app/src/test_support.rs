//! In-memory port fakes shared by the unit tests of this crate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::TimeZone;
use pantry_domain::error::PantryError;
use pantry_domain::time::Timestamp;

use crate::ports::{Clock, KeyValueStore, ReportSink};

#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<String, String>>,
    fail_writes: bool,
    fail_next_read: AtomicBool,
}

impl InMemoryStore {
    pub fn with_record(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Make the next read fail; later reads succeed again.
    pub fn fail_next_read(&self) {
        self.fail_next_read.store(true, Ordering::SeqCst);
    }

    pub fn record(&self, key: &str) -> Option<String> {
        self.records.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, PantryError>> + Send {
        let result = if self.fail_next_read.swap(false, Ordering::SeqCst) {
            Err(PantryError::Storage("connection reset".into()))
        } else {
            Ok(self.record(key))
        };
        async { result }
    }

    fn write(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), PantryError>> + Send {
        let result = if self.fail_writes {
            Err(PantryError::Storage("disk full".into()))
        } else {
            self.records.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        };
        async { result }
    }
}

/// A store whose reads always fail.
pub struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    async fn read(&self, _key: &str) -> Result<Option<String>, PantryError> {
        Err(PantryError::Storage("connection lost".into()))
    }

    async fn write(&self, _key: &str, _value: String) -> Result<(), PantryError> {
        Ok(())
    }
}

pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self(
            chrono::Utc
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub published: Mutex<Vec<String>>,
}

impl ReportSink for RecordingSink {
    fn publish(&self, report: String) -> impl Future<Output = Result<String, PantryError>> + Send {
        self.published.lock().unwrap().push(report);
        async { Ok("memory://report.txt".to_string()) }
    }
}
