//! Chirp validation errors

use thiserror::Error;

/// Result type for chirp validation
pub type ChirpResult<T> = Result<T, ChirpError>;

/// Rejections raised before a chirp reaches the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChirpError {
    /// Body exceeds the length limit
    #[error("Chirp is too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },
}

impl ChirpError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ChirpError::TooLong { .. } => 400,
        }
    }
}
