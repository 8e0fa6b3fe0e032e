//! # rb-store
//!
//! Record storage abstraction for realmbridge.
//!
//! This crate defines the storage provider interfaces that must be
//! implemented by concrete record stores. Records are JSON objects living
//! in typed collections; the bridge only ever creates handles, applies
//! partial updates, and loads full payloads.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod record;

pub use error::{StoreError, StoreResult};
pub use record::{RecordHandle, RecordStore};
