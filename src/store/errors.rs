//! # Store Errors
//!
//! Every record store operation returns one of these; none is fatal to the
//! process.

use std::io;

use thiserror::Error;

use crate::auth::AuthError;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backing file cannot be created, read, written or parsed
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Requested chirp id or user email does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Password did not match for an existing email
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The hashing primitive errored
    #[error("Internal error: password hashing failed")]
    HashingFailed,
}

impl StoreError {
    pub(crate) fn io(context: &str, err: io::Error) -> Self {
        StoreError::StorageUnavailable(format!("{}: {}", context, err))
    }

    pub(crate) fn json(context: &str, err: serde_json::Error) -> Self {
        StoreError::StorageUnavailable(format!("{}: {}", context, err))
    }

    pub(crate) fn lock_poisoned() -> Self {
        StoreError::StorageUnavailable("Lock poisoned".to_string())
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound(_) => 404,
            StoreError::InvalidCredentials => 401,
            StoreError::StorageUnavailable(_) => 500,
            StoreError::HashingFailed => 500,
        }
    }

    /// Whether the failure was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<AuthError> for StoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::HashingFailed => StoreError::HashingFailed,
            AuthError::MalformedHash => {
                StoreError::StorageUnavailable("Stored password hash is malformed".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(StoreError::NotFound("chirp 1".into()).status_code(), 404);
        assert_eq!(StoreError::InvalidCredentials.status_code(), 401);
        assert_eq!(StoreError::HashingFailed.status_code(), 500);
        assert_eq!(
            StoreError::StorageUnavailable("disk".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(StoreError::NotFound("user".into()).is_client_error());
        assert!(StoreError::InvalidCredentials.is_client_error());
        assert!(!StoreError::HashingFailed.is_client_error());
    }

    #[test]
    fn test_auth_error_conversion() {
        assert_eq!(
            StoreError::from(AuthError::HashingFailed),
            StoreError::HashingFailed
        );
        assert!(matches!(
            StoreError::from(AuthError::MalformedHash),
            StoreError::StorageUnavailable(_)
        ));
    }

    #[test]
    fn test_io_error_keeps_context() {
        let err = StoreError::io(
            "Failed to read database",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = err.to_string();
        assert!(display.contains("Failed to read database"));
        assert!(display.contains("denied"));
    }
}
