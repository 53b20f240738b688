//! Shared handler state

use std::sync::Arc;

use crate::chirps::BlockedWords;
use crate::observability::MetricsRegistry;
use crate::store::RecordStore;

/// Everything a handler can reach. One instance per server, behind an `Arc`.
#[derive(Debug)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub metrics: MetricsRegistry,
    pub blocked_words: BlockedWords,
}

impl AppState {
    pub fn new(store: RecordStore, blocked_words: BlockedWords) -> Self {
        Self {
            store: Arc::new(store),
            metrics: MetricsRegistry::new(),
            blocked_words,
        }
    }
}
