//! # Record Store
//!
//! The persistence core: one JSON document on disk holding every chirp and
//! user, shared by all requests.
//!
//! # Invariants
//!
//! - Ids in each mapping are dense from 1, assigned as `count + 1` under the
//!   write lock.
//! - Each mutation rewrites the whole document via temp file + rename.
//! - The document is loaded fresh on every call; nothing is cached.
//! - Password hashes never leave the store.

mod document;
mod errors;
mod record_store;

pub use document::{Chirp, Document, RecordId, UserPublic, UserRecord};
pub use errors::{StoreError, StoreResult};
pub use record_store::RecordStore;
