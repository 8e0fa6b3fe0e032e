//! The authentication bridge.

use std::collections::HashMap;
use std::sync::Arc;

use rb_backend::AuthBackend;
use rb_model::{pluralize, role_name_from_key, RecordId, Uid, UserData, USER_RECORD_TYPE};
use rb_store::{RecordHandle, RecordStore, StoreError};

use crate::error::{BridgeError, BridgeResult};
use crate::request::CreateUserRequest;

/// A user record created by [`AuthBridge::create_user`].
#[derive(Debug)]
pub struct UserRecord<H> {
    /// The identity's uid; also the record's id.
    pub uid: Uid,
    /// The data written to the record.
    pub data: UserData,
    /// Handle to the stored record.
    pub handle: H,
}

/// Bridges a user-management layer to an authentication backend and a
/// record store.
///
/// Both collaborators are injected once at construction and held for the
/// bridge's lifetime. The bridge adds no retries, no rollback, and no
/// session state of its own; it sequences calls and maps results.
#[derive(Debug)]
pub struct AuthBridge<B, S> {
    backend: Arc<B>,
    store: Arc<S>,
}

impl<B, S> Clone for AuthBridge<B, S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            store: Arc::clone(&self.store),
        }
    }
}

impl<B, S> AuthBridge<B, S>
where
    B: AuthBackend,
    S: RecordStore,
{
    /// Creates a bridge over the given collaborators.
    #[must_use]
    pub fn new(backend: Arc<B>, store: Arc<S>) -> Self {
        Self { backend, store }
    }

    /// Creates an identity and writes its user record.
    ///
    /// Steps, in order:
    ///
    /// 1. Create the identity with the backend (propagating its error
    ///    unchanged on failure).
    /// 2. For each requested role, reuse the supplied record reference or
    ///    mint a fresh key under the role's pluralized collection.
    /// 3. Write the assembled data to the `"User"` record keyed by the uid.
    ///
    /// There is no rollback: role keys minted in step 2 stay minted even if
    /// the record write fails, and the identity itself is not removed.
    ///
    /// ## Errors
    ///
    /// Returns the backend error from identity creation or the store error
    /// from the record write, unchanged.
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> BridgeResult<UserRecord<S::Handle>> {
        let uid = self
            .backend
            .create_identity(&request.email, &request.password)
            .await?;

        let mut data = UserData::new();
        for role in &request.roles {
            let id = match &role.id {
                Some(id) => id.clone(),
                None => self.backend.generate_key(&pluralize(&role.name)),
            };
            data.assign_role(&role.name, id);
        }
        data.avatar_image = request.avatar_image;
        data.permission = request.permission;

        let handle = self.store.record(USER_RECORD_TYPE, &RecordId::from(&uid));
        let patch = serde_json::to_value(&data)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        handle.update(&patch).await?;

        tracing::info!(%uid, roles = data.roles.len(), "user created");
        Ok(UserRecord { uid, data, handle })
    }

    /// Authenticates with an email/password pair; resolves with the uid.
    ///
    /// ## Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn login_with_email(&self, email: &str, password: &str) -> BridgeResult<Uid> {
        let uid = self
            .backend
            .authenticate_with_password(email, password)
            .await?;

        tracing::debug!(%uid, "logged in with email");
        Ok(uid)
    }

    /// Authenticates with a custom login token.
    ///
    /// ## Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn login_with_token(&self, token: &str) -> BridgeResult<()> {
        self.backend.authenticate_with_token(token).await?;

        tracing::debug!("logged in with token");
        Ok(())
    }

    /// True iff a current session exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.backend.current_session().is_some()
    }

    /// Clears the current session. A no-op when unauthenticated.
    pub fn logout(&self) {
        self.backend.clear_session();
    }

    /// Triggers the backend's password-reset flow for an email.
    ///
    /// ## Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn request_password_reset(&self, email: &str) -> BridgeResult<()> {
        self.backend.send_password_reset(email).await?;
        Ok(())
    }

    /// Completes a password reset.
    ///
    /// The reset token rides in the backend's old-password slot, as the
    /// backend's change-password call expects.
    ///
    /// ## Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn reset_password(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> BridgeResult<()> {
        self.backend.change_password(email, token, new_password).await?;
        Ok(())
    }

    /// Handle to the current session's user record, or `None` when
    /// unauthenticated.
    #[must_use]
    pub fn authed_user(&self) -> Option<S::Handle> {
        let session = self.backend.current_session()?;
        Some(
            self.store
                .record(USER_RECORD_TYPE, &RecordId::from(&session.uid)),
        )
    }

    /// Checks that the authenticated user has a role.
    ///
    /// ## Errors
    ///
    /// Returns `BridgeError::Unauthenticated` when no session exists,
    /// `BridgeError::RoleNotAssigned` when the loaded record lacks the
    /// role's key, or the store error from the load, unchanged.
    pub async fn authed_user_has_role(&self, role: &str) -> BridgeResult<()> {
        let handle = self.authed_user().ok_or(BridgeError::Unauthenticated)?;
        let data = load_user_data(&handle).await?;

        if data.has_role(role) {
            Ok(())
        } else {
            Err(BridgeError::RoleNotAssigned {
                role: role.to_string(),
            })
        }
    }

    /// Resolves the authenticated user's roles to record handles.
    ///
    /// Each key in the record's `roles` map yields an entry mapping the
    /// role name (suffix stripped) to a handle in the role's pluralized
    /// collection. Keys without the suffix are skipped.
    ///
    /// ## Errors
    ///
    /// Returns `BridgeError::Unauthenticated` when no session exists, or
    /// the store error from the load, unchanged.
    pub async fn authed_user_roles(&self) -> BridgeResult<HashMap<String, S::Handle>> {
        let handle = self.authed_user().ok_or(BridgeError::Unauthenticated)?;
        let data = load_user_data(&handle).await?;

        let mut roles = HashMap::new();
        for (key, id) in &data.roles {
            if let Some(name) = role_name_from_key(key) {
                roles.insert(name.to_string(), self.store.record(&pluralize(name), id));
            }
        }

        Ok(roles)
    }
}

async fn load_user_data<H: RecordHandle>(handle: &H) -> BridgeResult<UserData> {
    let value = handle.load().await?;
    let data = serde_json::from_value(value)
        .map_err(|err| StoreError::Serialization(err.to_string()))?;
    Ok(data)
}
