//! User creation request builder.

use rb_model::{RecordId, RoleBinding};

/// Request for [`AuthBridge::create_user`].
///
/// Roles are applied in the order they are added; each role's record
/// reference is either supplied here (reused verbatim) or freshly minted by
/// the backend at creation time.
///
/// [`AuthBridge::create_user`]: crate::AuthBridge::create_user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    /// Email for the new identity.
    pub email: String,
    /// Password for the new identity.
    pub password: String,
    /// Roles to associate with the user.
    pub roles: Vec<RoleBinding>,
    /// Optional avatar image record reference.
    pub avatar_image: Option<RecordId>,
    /// Optional permission record reference.
    pub permission: Option<RecordId>,
}

impl CreateUserRequest {
    /// Creates a request with no roles or optional fields.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            roles: Vec::new(),
            avatar_image: None,
            permission: None,
        }
    }

    /// Adds a role whose record reference will be freshly generated.
    #[must_use]
    pub fn role(mut self, name: impl Into<String>) -> Self {
        self.roles.push(RoleBinding::named(name));
        self
    }

    /// Adds a role bound to an existing record reference.
    #[must_use]
    pub fn role_with_id(mut self, name: impl Into<String>, id: RecordId) -> Self {
        self.roles.push(RoleBinding::with_id(name, id));
        self
    }

    /// Sets the avatar image reference.
    #[must_use]
    pub fn avatar_image(mut self, id: RecordId) -> Self {
        self.avatar_image = Some(id);
        self
    }

    /// Sets the permission reference.
    #[must_use]
    pub fn permission(mut self, id: RecordId) -> Self {
        self.permission = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_role_order() {
        let request = CreateUserRequest::new("a@b.test", "pw")
            .role("tenant")
            .role_with_id("owner", RecordId::new("abc"));

        assert_eq!(request.roles.len(), 2);
        assert_eq!(request.roles[0].name, "tenant");
        assert!(request.roles[0].id.is_none());
        assert_eq!(request.roles[1].id.as_ref().unwrap().as_str(), "abc");
    }
}
