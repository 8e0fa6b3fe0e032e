//! Bridge error types.

use rb_backend::BackendError;
use rb_store::StoreError;
use thiserror::Error;

/// Errors surfaced by bridge operations.
///
/// Collaborator failures pass through unchanged; the bridge adds only the
/// session-related variants it raises itself.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Error from the authentication backend, passed through unchanged.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Error from the record store, passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The operation requires a session but none is established.
    #[error("no authenticated session")]
    Unauthenticated,

    /// The authenticated user's record does not carry the role.
    #[error("role '{role}' is not assigned to the authenticated user")]
    RoleNotAssigned {
        /// The role that was checked.
        role: String,
    },
}

impl BridgeError {
    /// Checks if this is an unauthenticated error.
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Checks if this is a missing-role error.
    #[must_use]
    pub const fn is_role_not_assigned(&self) -> bool {
        matches!(self, Self::RoleNotAssigned { .. })
    }
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_pass_through_unchanged() {
        let err = BridgeError::from(BackendError::InvalidCredentials);

        assert_eq!(err.to_string(), "invalid credentials");
        assert!(!err.is_unauthenticated());
    }

    #[test]
    fn role_not_assigned_names_the_role() {
        let err = BridgeError::RoleNotAssigned {
            role: "tenant".to_string(),
        };

        assert!(err.is_role_not_assigned());
        assert!(err.to_string().contains("tenant"));
    }
}
