//! Role bindings and collection naming.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Maps a singular role name to the collection its records live in.
///
/// Naive pluralization (`"tenant"` → `"tenants"`); role names are not
/// validated beyond what this mapping produces.
#[must_use]
pub fn pluralize(role: &str) -> String {
    format!("{role}s")
}

/// A role requested for a user at creation time.
///
/// The reference is either supplied by the caller (an existing role record
/// is reused verbatim) or left empty, in which case the backend mints a
/// fresh push-style key under the role's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBinding {
    /// Singular role name (e.g., "tenant", "owner").
    pub name: String,
    /// Existing role-record reference to reuse, if any.
    pub id: Option<RecordId>,
}

impl RoleBinding {
    /// Binds a role whose record reference will be freshly generated.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    /// Binds a role to an existing record reference.
    #[must_use]
    pub fn with_id(name: impl Into<String>, id: RecordId) -> Self {
        Self {
            name: name.into(),
            id: Some(id),
        }
    }
}
