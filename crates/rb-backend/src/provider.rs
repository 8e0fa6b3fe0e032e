//! Authentication backend provider trait.

use async_trait::async_trait;
use rb_model::{RecordId, Session, Uid};

use crate::error::BackendResult;

/// Provider for authentication backend operations.
///
/// Implementations must be thread-safe and support concurrent access. The
/// backend owns the current session: establishing one is a side effect of
/// the authenticating operations, and [`current_session`] /
/// [`clear_session`] are synchronous because the client library holds the
/// session locally.
///
/// [`current_session`]: AuthBackend::current_session
/// [`clear_session`]: AuthBackend::clear_session
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Creates a new identity and establishes a session for it.
    ///
    /// ## Errors
    ///
    /// Returns `BackendError::DuplicateEmail` if an identity with the same
    /// email already exists.
    async fn create_identity(&self, email: &str, password: &str) -> BackendResult<Uid>;

    /// Authenticates with an email/password pair.
    ///
    /// ## Errors
    ///
    /// Returns `BackendError::InvalidCredentials` if the pair does not
    /// match an identity.
    async fn authenticate_with_password(&self, email: &str, password: &str)
        -> BackendResult<Uid>;

    /// Authenticates with a custom login token.
    ///
    /// ## Errors
    ///
    /// Returns `BackendError::InvalidToken` if the token is not recognized.
    async fn authenticate_with_token(&self, token: &str) -> BackendResult<()>;

    /// Returns the current session, if one is established.
    fn current_session(&self) -> Option<Session>;

    /// Clears the current session. A no-op when unauthenticated.
    fn clear_session(&self);

    /// Triggers the backend's password-reset flow for an email.
    ///
    /// ## Errors
    ///
    /// Returns `BackendError::IdentityNotFound` if no identity exists for
    /// the email.
    async fn send_password_reset(&self, email: &str) -> BackendResult<()>;

    /// Changes an identity's password.
    ///
    /// The old-password credential may also carry an outstanding reset
    /// token issued by [`send_password_reset`].
    ///
    /// ## Errors
    ///
    /// Returns `BackendError::InvalidCredentials` if the old credential
    /// matches neither the current password nor an outstanding reset token.
    ///
    /// [`send_password_reset`]: AuthBackend::send_password_reset
    async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> BackendResult<()>;

    /// Mints a push-style unique key under a named child collection.
    ///
    /// Synchronous: key generation happens locally in the client, without a
    /// round trip. Every call returns a fresh key; keys are never reused.
    fn generate_key(&self, collection: &str) -> RecordId;
}
