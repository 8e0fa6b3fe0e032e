//! User record payload.
//!
//! The user record is stored under the `"User"` type, keyed by the
//! identity's uid. Role assignments live in a `roles` map whose keys are
//! derived deterministically from the role name plus the `_id` suffix.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Record type under which user records are stored.
pub const USER_RECORD_TYPE: &str = "User";

/// Suffix appended to a role name to form its key in the `roles` map.
pub const ROLE_KEY_SUFFIX: &str = "_id";

/// Derives the `roles` map key for a role name (`"tenant"` → `"tenant_id"`).
#[must_use]
pub fn role_key(role: &str) -> String {
    format!("{role}{ROLE_KEY_SUFFIX}")
}

/// Recovers the role name from a `roles` map key, if it carries the suffix.
#[must_use]
pub fn role_name_from_key(key: &str) -> Option<&str> {
    key.strip_suffix(ROLE_KEY_SUFFIX)
}

/// Payload of a stored user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Role references keyed by `"<roleName>_id"`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<String, RecordId>,

    /// Optional avatar image record reference.
    #[serde(
        rename = "avatarImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_image: Option<RecordId>,

    /// Optional permission record reference.
    #[serde(
        rename = "permission_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub permission: Option<RecordId>,
}

impl UserData {
    /// Creates an empty user payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a role reference under the derived key.
    pub fn assign_role(&mut self, role: &str, id: RecordId) {
        self.roles.insert(role_key(role), id);
    }

    /// Checks whether a role is assigned.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains_key(&role_key(role))
    }

    /// Role names implied by the `roles` map keys (suffix stripped).
    ///
    /// Keys that do not carry the suffix are skipped.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().filter_map(|key| role_name_from_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_key_round_trip() {
        assert_eq!(role_key("tenant"), "tenant_id");
        assert_eq!(role_name_from_key("tenant_id"), Some("tenant"));
        assert_eq!(role_name_from_key("avatarImage"), None);
    }

    #[test]
    fn assign_and_query_roles() {
        let mut data = UserData::new();
        data.assign_role("tenant", RecordId::new("abc"));

        assert!(data.has_role("tenant"));
        assert!(!data.has_role("owner"));
        assert_eq!(data.role_names().collect::<Vec<_>>(), vec!["tenant"]);
    }

    #[test]
    fn wire_field_names() {
        let mut data = UserData::new();
        data.assign_role("owner", RecordId::new("o1"));
        data.avatar_image = Some(RecordId::new("img1"));
        data.permission = Some(RecordId::new("p1"));

        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["roles"]["owner_id"], "o1");
        assert_eq!(json["avatarImage"], "img1");
        assert_eq!(json["permission_id"], "p1");
    }

    #[test]
    fn optional_fields_are_omitted() {
        let json = serde_json::to_value(UserData::new()).unwrap();

        assert_eq!(json, serde_json::json!({}));
    }
}
