//! Persisted record shapes
//!
//! The whole database is one [`Document`]. Map keys are integer ids, which
//! serde_json writes as strings: `{"chirps": {"1": {...}}, "users": {...}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Chirp and user id
pub type RecordId = u64;

/// An immutable short post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: RecordId,
    pub body: String,
}

/// A user as stored on disk
///
/// Never leaves the store; callers get [`UserPublic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub email: String,
    /// Argon2id PHC string
    pub password_hash: String,
}

/// The caller-facing view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: RecordId,
    pub email: String,
}

impl From<&UserRecord> for UserPublic {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// The complete persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub chirps: BTreeMap<RecordId, Chirp>,
    #[serde(default)]
    pub users: BTreeMap<RecordId, UserRecord>,
}

impl Document {
    /// Id the next chirp will receive
    pub fn next_chirp_id(&self) -> RecordId {
        self.chirps.len() as RecordId + 1
    }

    /// Id the next user will receive
    pub fn next_user_id(&self) -> RecordId {
        self.users.len() as RecordId + 1
    }

    /// First user with this email, lowest id first
    pub fn find_user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.values().find(|u| u.email == email)
    }
}
