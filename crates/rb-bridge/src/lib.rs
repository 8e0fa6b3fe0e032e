//! # rb-bridge
//!
//! Bridges an application's user-management layer to a realtime-database
//! style authentication backend.
//!
//! The bridge wraps the backend's authentication operations (create user,
//! login by password or token, logout, password reset and change) in async
//! `Result`-returning methods, and optionally enriches a created user with
//! role associations backed by a generic record store.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use rb_bridge::{AuthBridge, CreateUserRequest};
//! use rb_memory::{MemoryAuthBackend, MemoryRecordStore};
//!
//! let bridge = AuthBridge::new(
//!     Arc::new(MemoryAuthBackend::new()),
//!     Arc::new(MemoryRecordStore::new()),
//! );
//!
//! let user = bridge
//!     .create_user(
//!         CreateUserRequest::new("tenant@example.com", "hunter2")
//!             .role("tenant")
//!             .role_with_id("owner", "abc".into()),
//!     )
//!     .await?;
//!
//! assert!(bridge.is_authenticated());
//! bridge.authed_user_has_role("tenant").await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod bridge;
pub mod error;
pub mod request;

pub use bridge::{AuthBridge, UserRecord};
pub use error::{BridgeError, BridgeResult};
pub use request::CreateUserRequest;
