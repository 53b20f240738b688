//! # Chirps
//!
//! Pre-store processing of chirp bodies: length validation and the content
//! filter. The store trusts its callers to have run both.

pub mod errors;
pub mod filter;

pub use errors::{ChirpError, ChirpResult};
pub use filter::{filter, validate_body, BlockedWords, MASK, MAX_CHIRP_LENGTH};

/// Validate then filter a raw body, producing what gets stored
pub fn prepare_body(body: &str, blocked: &BlockedWords) -> ChirpResult<String> {
    validate_body(body)?;
    Ok(filter(body, blocked))
}
