//! # rb-model
//!
//! Domain models for realmbridge.
//!
//! This crate defines the core types shared by the provider traits and the
//! bridge itself: backend-assigned identifiers, sessions, role bindings, and
//! the shape of the stored user record.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod id;
pub mod role;
pub mod session;
pub mod user;

pub use id::{RecordId, Uid};
pub use role::{pluralize, RoleBinding};
pub use session::{AuthMethod, Session};
pub use user::{role_key, role_name_from_key, UserData, ROLE_KEY_SUFFIX, USER_RECORD_TYPE};
