//! # Auth Errors
//!
//! Error types for the credential hasher.

use thiserror::Error;

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Credential hashing and verification errors
///
/// A password mismatch is not an error; `verify_password` reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The hashing primitive itself failed (bad parameters, RNG failure)
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// A stored hash is not a valid PHC string
    #[error("Stored password hash is malformed")]
    MalformedHash,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::HashingFailed => 500,
            AuthError::MalformedHash => 500,
        }
    }
}
