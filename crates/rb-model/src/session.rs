//! Session model.
//!
//! A session is backend-held authentication state; its existence implies
//! "authenticated". The bridge never inspects more than the uid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::Uid;

/// How a session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMethod {
    /// Email/password login.
    Password,
    /// Custom-token login.
    Token,
    /// Session opened as part of identity creation.
    IdentityCreation,
}

/// An established authentication session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user's identifier.
    pub uid: Uid,
    /// When the session was established.
    pub started_at: DateTime<Utc>,
    /// How the session was established.
    pub method: AuthMethod,
}

impl Session {
    /// Creates a session established now.
    #[must_use]
    pub fn new(uid: Uid, method: AuthMethod) -> Self {
        Self {
            uid,
            started_at: Utc::now(),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_carries_uid_and_method() {
        let session = Session::new(Uid::new("local:1"), AuthMethod::Password);

        assert_eq!(session.uid.as_str(), "local:1");
        assert_eq!(session.method, AuthMethod::Password);
    }
}
