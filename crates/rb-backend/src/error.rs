//! Backend error types.

use thiserror::Error;

/// Errors that can occur during backend operations.
///
/// The bridge never catches or recovers from these; they are surfaced to
/// the caller unchanged.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Credentials did not match an identity.
    ///
    /// Deliberately generic: covers both an unknown email and a wrong
    /// password, so callers cannot enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An identity with this email already exists.
    #[error("identity already exists for email '{email}'")]
    DuplicateEmail {
        /// Conflicting email address.
        email: String,
    },

    /// No identity exists for this email.
    #[error("no identity for email '{email}'")]
    IdentityNotFound {
        /// Email that was looked up.
        email: String,
    },

    /// The supplied login token was not recognized.
    #[error("invalid authentication token")]
    InvalidToken,

    /// Error reported by a remote backend, passed through opaquely.
    #[error("backend error {code}: {message}")]
    Provider {
        /// Backend-defined error code.
        code: String,
        /// Backend-provided message.
        message: String,
    },

    /// Connection to the backend failed.
    #[error("backend connection error: {0}")]
    Connection(String),

    /// Internal backend error.
    #[error("internal backend error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Creates a duplicate email error.
    #[must_use]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Creates an identity not found error.
    #[must_use]
    pub fn identity_not_found(email: impl Into<String>) -> Self {
        Self::IdentityNotFound {
            email: email.into(),
        }
    }

    /// Checks if this is a credentials failure.
    #[must_use]
    pub const fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Checks if this is a duplicate email error.
    #[must_use]
    pub const fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail { .. })
    }
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
