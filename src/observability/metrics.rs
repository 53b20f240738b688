//! Service counters
//!
//! - Counters only, atomic, `Relaxed` ordering
//! - Only the file-server hit counter can be reset

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Requests served under `/app`
    fileserver_hits: AtomicU64,
    chirps_created: AtomicU64,
    users_created: AtomicU64,
    logins_rejected: AtomicU64,
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub fileserver_hits: u64,
    pub chirps_created: u64,
    pub users_created: u64,
    pub logins_rejected: u64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_fileserver_hits(&self) {
        self.fileserver_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero the hit counter
    pub fn reset_fileserver_hits(&self) {
        self.fileserver_hits.store(0, Ordering::Relaxed);
    }

    pub fn increment_chirps_created(&self) {
        self.chirps_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_users_created(&self) {
        self.users_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_logins_rejected(&self) {
        self.logins_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            fileserver_hits: self.fileserver_hits.load(Ordering::Relaxed),
            chirps_created: self.chirps_created.load(Ordering::Relaxed),
            users_created: self.users_created.load(Ordering::Relaxed),
            logins_rejected: self.logins_rejected.load(Ordering::Relaxed),
        }
    }
}
