//! # rb-backend
//!
//! Authentication backend abstraction for realmbridge.
//!
//! This crate defines the provider interface that must be implemented by
//! concrete authentication backends (a realtime-database client, an
//! in-memory test double, etc.). The bridge treats the backend as opaque:
//! session storage, credential verification, and key minting all happen
//! behind this trait.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod provider;

pub use error::{BackendError, BackendResult};
pub use provider::AuthBackend;
