//! Storage error types.

use rb_model::RecordId;
use thiserror::Error;

/// Errors that can occur during record storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found.
    #[error("record not found: {record_type} with id '{id}'")]
    NotFound {
        /// Record type (e.g., "User", "tenant").
        record_type: String,
        /// Record identifier.
        id: RecordId,
    },

    /// Payload could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Connection to the store failed.
    #[error("store connection error: {0}")]
    Connection(String),

    /// Internal store error.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(record_type: impl Into<String>, id: RecordId) -> Self {
        Self::NotFound {
            record_type: record_type.into(),
            id,
        }
    }

    /// Checks if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error() {
        let err = StoreError::not_found("User", RecordId::new("u1"));

        assert!(err.is_not_found());
        assert!(err.to_string().contains("User"));
        assert!(err.to_string().contains("u1"));
    }
}
