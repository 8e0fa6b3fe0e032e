//! In-memory record store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use rb_model::RecordId;
use rb_store::{RecordHandle, RecordStore, StoreError, StoreResult};
use serde_json::{Map, Value};

type Records = DashMap<(String, String), Value>;

/// In-memory record store.
///
/// Records are JSON objects keyed by `(type, id)`. Cloning the store is
/// cheap and shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<Records>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    type Handle = MemoryRecordHandle;

    fn record(&self, record_type: &str, id: &RecordId) -> Self::Handle {
        MemoryRecordHandle {
            records: Arc::clone(&self.records),
            record_type: record_type.to_string(),
            id: id.clone(),
        }
    }
}

/// Handle to a record in a [`MemoryRecordStore`].
#[derive(Debug, Clone)]
pub struct MemoryRecordHandle {
    records: Arc<Records>,
    record_type: String,
    id: RecordId,
}

impl MemoryRecordHandle {
    fn key(&self) -> (String, String) {
        (self.record_type.clone(), self.id.as_str().to_string())
    }
}

#[async_trait]
impl RecordHandle for MemoryRecordHandle {
    fn record_type(&self) -> &str {
        &self.record_type
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    async fn update(&self, patch: &Value) -> StoreResult<()> {
        let Some(patch) = patch.as_object() else {
            return Err(StoreError::Serialization(
                "record patch must be a JSON object".to_string(),
            ));
        };

        let mut entry = self
            .records
            .entry(self.key())
            .or_insert_with(|| Value::Object(Map::new()));
        let record = entry.as_object_mut().ok_or_else(|| {
            StoreError::Internal(format!(
                "stored record {}/{} is not an object",
                self.record_type, self.id
            ))
        })?;

        for (field, value) in patch {
            record.insert(field.clone(), value.clone());
        }

        tracing::debug!(record_type = %self.record_type, id = %self.id, "record updated");
        Ok(())
    }

    async fn load(&self) -> StoreResult<Value> {
        self.records
            .get(&self.key())
            .map(|entry| entry.clone())
            .ok_or_else(|| StoreError::not_found(&self.record_type, self.id.clone()))
    }
}
