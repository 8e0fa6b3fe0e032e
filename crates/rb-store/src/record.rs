//! Record storage provider traits.

use async_trait::async_trait;
use rb_model::RecordId;

use crate::error::StoreResult;

/// Handle to a single record in a typed collection.
///
/// A handle is cheap and performs no I/O until [`update`] or [`load`] is
/// called; the record it points at may not exist yet.
///
/// [`update`]: RecordHandle::update
/// [`load`]: RecordHandle::load
#[async_trait]
pub trait RecordHandle: Send + Sync {
    /// The record's type (collection) name.
    fn record_type(&self) -> &str;

    /// The record's identifier.
    fn id(&self) -> &RecordId;

    /// Applies a partial update to the record.
    ///
    /// The patch must be a JSON object; its top-level fields are merged
    /// into the record, creating the record if it does not exist.
    ///
    /// ## Errors
    ///
    /// Returns `StoreError::Serialization` if the patch is not an object.
    async fn update(&self, patch: &serde_json::Value) -> StoreResult<()>;

    /// Loads the record's full payload.
    ///
    /// ## Errors
    ///
    /// Returns `StoreError::NotFound` if the record does not exist.
    async fn load(&self) -> StoreResult<serde_json::Value>;
}

/// Provider for record storage.
///
/// Implementations must be thread-safe and support concurrent access.
pub trait RecordStore: Send + Sync {
    /// Handle type this store hands out.
    type Handle: RecordHandle;

    /// Creates a handle to the record of the given type and id.
    ///
    /// Synchronous: obtaining a handle performs no I/O.
    fn record(&self, record_type: &str, id: &RecordId) -> Self::Handle;
}
