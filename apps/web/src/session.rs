//! Per-session generation history.
//!
//! Each browser session gets its own `SessionHistory`, looked up by the
//! session id carried in the form. Histories live only in memory and are
//! lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistoryEntry {
    pub headline: String,
    pub generated_at: String,
}

/// Append-only record of the articles generated in one session.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<SessionHistoryEntry>,
}

impl SessionHistory {
    pub fn record(&mut self, entry: SessionHistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[SessionHistoryEntry] {
        &self.entries
    }
}

/// All live sessions. Unbounded: nothing is evicted for the life of the process.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Arc<Mutex<SessionHistory>>>>>,
}

impl SessionStore {
    /// Returns the history for `id`, creating an empty one on first use.
    pub async fn open(&self, id: Uuid) -> Arc<Mutex<SessionHistory>> {
        self.sessions
            .lock()
            .await
            .entry(id)
            .or_default()
            .clone()
    }
}
