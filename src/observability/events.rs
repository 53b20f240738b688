//! Observable events
//!
//! Every log line names one of these.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Backing database file opened
    StoreOpened,
    /// HTTP listener bound
    ServerStart,

    // Requests
    /// Chirp persisted
    ChirpCreated,
    /// Chirp rejected before reaching the store
    ChirpRejected,
    /// User registered
    UserCreated,
    /// Successful login
    LoginSucceeded,
    /// Login denied (unknown email or wrong password)
    LoginRejected,
    /// Request body could not be decoded
    BadRequest,
    /// Hit counter reset
    MetricsReset,

    // Failures
    /// Store I/O, parse or hashing failure
    StorageFailure,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::ServerStart => "SERVER_START",
            Event::ChirpCreated => "CHIRP_CREATED",
            Event::ChirpRejected => "CHIRP_REJECTED",
            Event::UserCreated => "USER_CREATED",
            Event::LoginSucceeded => "LOGIN_SUCCEEDED",
            Event::LoginRejected => "LOGIN_REJECTED",
            Event::BadRequest => "BAD_REQUEST",
            Event::MetricsReset => "METRICS_RESET",
            Event::StorageFailure => "STORAGE_FAILURE",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ChirpRejected | Event::LoginRejected | Event::BadRequest => Severity::Warn,
            Event::StorageFailure => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
