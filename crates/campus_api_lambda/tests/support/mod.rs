#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use campus_api_core::stored_value::Record;
use campus_api_lambda::adapters::key_value_store::{KeyValueStore, StoreError};
use campus_api_lambda::adapters::object_store::{AssetStore, ObjectStoreError};
use serde_json::{json, Value};

/// Table double keyed by the debug rendering of the primary key record.
#[derive(Default)]
pub struct InMemoryTable {
    records: Mutex<BTreeMap<String, Record>>,
    key_attributes: Vec<String>,
    reads: Mutex<usize>,
    writes: Mutex<usize>,
}

impl InMemoryTable {
    pub fn with_key_attributes(attributes: &[&str]) -> Self {
        Self {
            key_attributes: attributes.iter().map(|name| name.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn seed(&self, record: Record) {
        let key = self.key_of(&record);
        self.records
            .lock()
            .expect("poisoned mutex")
            .insert(key, record);
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock().expect("poisoned mutex")
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().expect("poisoned mutex")
    }

    fn key_of(&self, record: &Record) -> String {
        let key: Vec<_> = self
            .key_attributes
            .iter()
            .map(|name| format!("{name}={:?}", record.get(name)))
            .collect();
        key.join("|")
    }
}

impl KeyValueStore for InMemoryTable {
    fn get_record(&self, key: &Record) -> Result<Option<Record>, StoreError> {
        *self.reads.lock().expect("poisoned mutex") += 1;
        Ok(self
            .records
            .lock()
            .expect("poisoned mutex")
            .get(&self.key_of(key))
            .cloned())
    }

    fn put_record(&self, record: &Record) -> Result<(), StoreError> {
        *self.writes.lock().expect("poisoned mutex") += 1;
        self.seed(record.clone());
        Ok(())
    }
}

/// Asset store double that records every request it receives.
pub struct RecordingAssetStore {
    result: Result<Vec<u8>, ObjectStoreError>,
    calls: Mutex<usize>,
}

impl RecordingAssetStore {
    pub fn returning(result: Result<Vec<u8>, ObjectStoreError>) -> Self {
        Self {
            result,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("poisoned mutex")
    }
}

impl AssetStore for RecordingAssetStore {
    fn get_object(&self, _bucket: &str, _key: &str) -> Result<Vec<u8>, ObjectStoreError> {
        *self.calls.lock().expect("poisoned mutex") += 1;
        self.result.clone()
    }
}

pub fn http_event(method: &str, path: &str) -> Value {
    json!({
        "version": "2.0",
        "routeKey": format!("{method} {path}"),
        "rawPath": path,
        "requestContext": {"http": {"method": method, "path": path}},
        "isBase64Encoded": false
    })
}
