//! # Chirpy Auth Module
//!
//! Password hashing and verification used by the record store when users
//! register and log in.

pub mod crypto;
pub mod errors;

pub use crypto::{hash_password, verify_password};
pub use errors::{AuthError, AuthResult};
