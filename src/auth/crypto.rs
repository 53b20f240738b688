//! # Credential Hasher
//!
//! One-way password hashing and verification.
//!
//! Passwords are only ever stored as salted Argon2id hashes in PHC string
//! format. The cost parameters are fixed at compile time; changing them does
//! not invalidate existing hashes because the PHC string records the
//! parameters it was produced with.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use super::errors::{AuthError, AuthResult};

/// Argon2 memory cost in KiB
pub const HASH_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2 iteration count
pub const HASH_ITERATIONS: u32 = 2;

/// Argon2 lanes
pub const HASH_PARALLELISM: u32 = 1;

fn hasher() -> AuthResult<Argon2<'static>> {
    let params = Params::new(HASH_MEMORY_KIB, HASH_ITERATIONS, HASH_PARALLELISM, None)
        .map_err(|_| AuthError::HashingFailed)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password with a fresh random salt
///
/// Fails only on an internal library error, never because of the password content.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verify a password against a stored hash
///
/// Returns `Ok(false)` on mismatch. The comparison is constant-time inside the
/// argon2 crate.
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::MalformedHash)?;

    Ok(hasher()?
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
