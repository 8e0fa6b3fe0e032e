//! # rb-memory
//!
//! In-memory provider implementations for realmbridge.
//!
//! These back the test suite and let host applications exercise the bridge
//! without a live backend. All state is process-local and lost on drop.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod backend;
pub mod store;

pub use backend::{MemoryAuthBackend, MemoryBackendConfig};
pub use store::{MemoryRecordHandle, MemoryRecordStore};
