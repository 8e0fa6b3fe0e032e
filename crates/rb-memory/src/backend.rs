//! In-memory authentication backend.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use rb_backend::{AuthBackend, BackendError, BackendResult};
use rb_model::{AuthMethod, RecordId, Session, Uid};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configuration for the in-memory backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryBackendConfig {
    /// Prefix for minted uids (`"<prefix>:<key>"`), mirroring
    /// provider-qualified identifiers handed out by hosted backends.
    pub uid_prefix: String,
}

impl Default for MemoryBackendConfig {
    fn default() -> Self {
        Self {
            uid_prefix: "local".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct Identity {
    uid: Uid,
    password: String,
}

/// In-memory authentication backend.
///
/// Identities are keyed by email. The current session lives in a single
/// slot, matching the one-session-per-client behavior of realtime-database
/// client libraries.
#[derive(Debug, Default)]
pub struct MemoryAuthBackend {
    config: MemoryBackendConfig,
    identities: DashMap<String, Identity>,
    login_tokens: DashMap<String, Uid>,
    reset_tokens: DashMap<String, String>,
    session: RwLock<Option<Session>>,
}

impl MemoryAuthBackend {
    /// Creates a backend with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with the given configuration.
    #[must_use]
    pub fn with_config(config: MemoryBackendConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers a custom login token for a uid.
    ///
    /// Hosted backends mint these server-side; here tests and hosts
    /// register them directly.
    pub fn register_token(&self, token: impl Into<String>, uid: Uid) {
        self.login_tokens.insert(token.into(), uid);
    }

    /// Returns the outstanding reset token for an email, if one was issued.
    ///
    /// A real backend delivers the token out of band (email); this hook
    /// stands in for that channel. The token stays outstanding until it is
    /// used in [`AuthBackend::change_password`].
    #[must_use]
    pub fn issued_reset_token(&self, email: &str) -> Option<String> {
        self.reset_tokens.get(email).map(|token| token.clone())
    }

    fn mint_uid(&self) -> Uid {
        Uid::new(format!(
            "{}:{}",
            self.config.uid_prefix,
            Uuid::now_v7().simple()
        ))
    }

    fn establish_session(&self, uid: Uid, method: AuthMethod) {
        *self.session.write() = Some(Session::new(uid, method));
    }
}

#[async_trait]
impl AuthBackend for MemoryAuthBackend {
    async fn create_identity(&self, email: &str, password: &str) -> BackendResult<Uid> {
        if self.identities.contains_key(email) {
            return Err(BackendError::duplicate_email(email));
        }

        let uid = self.mint_uid();
        self.identities.insert(
            email.to_string(),
            Identity {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );
        self.establish_session(uid.clone(), AuthMethod::IdentityCreation);

        tracing::debug!(%uid, "identity created");
        Ok(uid)
    }

    async fn authenticate_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Uid> {
        let uid = match self.identities.get(email) {
            Some(identity) if identity.password == password => identity.uid.clone(),
            // Unknown email and wrong password are indistinguishable.
            _ => return Err(BackendError::InvalidCredentials),
        };

        self.establish_session(uid.clone(), AuthMethod::Password);

        tracing::debug!(%uid, "password authentication succeeded");
        Ok(uid)
    }

    async fn authenticate_with_token(&self, token: &str) -> BackendResult<()> {
        let uid = self
            .login_tokens
            .get(token)
            .map(|entry| entry.clone())
            .ok_or(BackendError::InvalidToken)?;

        self.establish_session(uid.clone(), AuthMethod::Token);

        tracing::debug!(%uid, "token authentication succeeded");
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    fn clear_session(&self) {
        *self.session.write() = None;
    }

    async fn send_password_reset(&self, email: &str) -> BackendResult<()> {
        if !self.identities.contains_key(email) {
            return Err(BackendError::identity_not_found(email));
        }

        let token = Uuid::now_v7().simple().to_string();
        self.reset_tokens.insert(email.to_string(), token);

        tracing::debug!(email, "password reset token issued");
        Ok(())
    }

    async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> BackendResult<()> {
        let mut identity = self
            .identities
            .get_mut(email)
            .ok_or_else(|| BackendError::identity_not_found(email))?;

        let matches_password = identity.password == old_password;
        let matches_reset_token = self
            .reset_tokens
            .get(email)
            .is_some_and(|token| *token == old_password);

        if !matches_password && !matches_reset_token {
            return Err(BackendError::InvalidCredentials);
        }

        identity.password = new_password.to_string();
        drop(identity);

        // A reset token is single-use.
        if matches_reset_token {
            self.reset_tokens.remove(email);
        }

        tracing::debug!(email, "password changed");
        Ok(())
    }

    fn generate_key(&self, collection: &str) -> RecordId {
        // UUIDv7 keys are time-ordered, like the push keys hosted backends
        // mint under a child path.
        RecordId::new(format!("{}-{}", collection, Uuid::now_v7().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_identity_rejects_duplicate_email() {
        let backend = MemoryAuthBackend::new();
        backend.create_identity("a@b.test", "pw").await.unwrap();

        let err = backend.create_identity("a@b.test", "pw2").await.unwrap_err();
        assert!(err.is_duplicate_email());
    }

    #[tokio::test]
    async fn create_identity_establishes_session() {
        let backend = MemoryAuthBackend::new();
        assert!(backend.current_session().is_none());

        let uid = backend.create_identity("a@b.test", "pw").await.unwrap();

        let session = backend.current_session().unwrap();
        assert_eq!(session.uid, uid);
        assert_eq!(session.method, AuthMethod::IdentityCreation);
    }

    #[tokio::test]
    async fn password_login_and_logout() {
        let backend = MemoryAuthBackend::new();
        let uid = backend.create_identity("a@b.test", "pw").await.unwrap();
        backend.clear_session();

        let authed = backend
            .authenticate_with_password("a@b.test", "pw")
            .await
            .unwrap();
        assert_eq!(authed, uid);
        assert!(backend.current_session().is_some());

        backend.clear_session();
        assert!(backend.current_session().is_none());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_alike() {
        let backend = MemoryAuthBackend::new();
        backend.create_identity("a@b.test", "pw").await.unwrap();
        backend.clear_session();

        let wrong = backend
            .authenticate_with_password("a@b.test", "nope")
            .await
            .unwrap_err();
        let unknown = backend
            .authenticate_with_password("x@y.test", "pw")
            .await
            .unwrap_err();

        assert_eq!(wrong.to_string(), unknown.to_string());
        assert!(backend.current_session().is_none());
    }

    #[tokio::test]
    async fn token_login() {
        let backend = MemoryAuthBackend::new();
        let uid = backend.create_identity("a@b.test", "pw").await.unwrap();
        backend.clear_session();
        backend.register_token("tok-1", uid.clone());

        backend.authenticate_with_token("tok-1").await.unwrap();
        assert_eq!(backend.current_session().unwrap().uid, uid);

        backend.clear_session();
        let err = backend.authenticate_with_token("bogus").await.unwrap_err();
        assert!(matches!(err, BackendError::InvalidToken));
    }

    #[tokio::test]
    async fn reset_token_changes_password_once() {
        let backend = MemoryAuthBackend::new();
        backend.create_identity("a@b.test", "old").await.unwrap();

        backend.send_password_reset("a@b.test").await.unwrap();
        let token = backend.issued_reset_token("a@b.test").unwrap();

        backend
            .change_password("a@b.test", &token, "new")
            .await
            .unwrap();

        // Token was consumed; reusing it fails.
        let err = backend
            .change_password("a@b.test", &token, "newer")
            .await
            .unwrap_err();
        assert!(err.is_invalid_credentials());

        backend
            .authenticate_with_password("a@b.test", "new")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn reset_request_requires_known_email() {
        let backend = MemoryAuthBackend::new();

        let err = backend.send_password_reset("x@y.test").await.unwrap_err();
        assert!(matches!(err, BackendError::IdentityNotFound { .. }));
    }

    #[test]
    fn generated_keys_are_unique_and_scoped() {
        let backend = MemoryAuthBackend::new();

        let a = backend.generate_key("tenants");
        let b = backend.generate_key("tenants");

        assert_ne!(a, b);
        assert!(a.as_str().starts_with("tenants-"));
    }

    #[test]
    fn uid_prefix_is_configurable() {
        let backend = MemoryAuthBackend::with_config(MemoryBackendConfig {
            uid_prefix: "simplelogin".to_string(),
        });

        let uid = backend.mint_uid();
        assert!(uid.as_str().starts_with("simplelogin:"));
    }
}
