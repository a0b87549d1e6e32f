use std::collections::VecDeque;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::models::{HistoryEntry, QueryResult};

/// Default number of entries retained per session
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only, insertion-ordered log of completed queries.
///
/// Ids are millisecond timestamps. When two appends land in the same millisecond (or the
/// clock goes backwards) the id is bumped past the previous one, so ids stay unique and
/// strictly increasing. Once `limit` entries are held the oldest one is evicted; a limit
/// of zero disables eviction.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
    last_id_ms: i64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { entries: VecDeque::new(), limit, last_id_ms: 0 }
    }

    /// Record a result stamped with the current local time
    pub fn append(&mut self, result: QueryResult) -> String {
        self.append_at(result, Local::now())
    }

    /// Record a result stamped with `now`, returning its id
    pub fn append_at(&mut self, result: QueryResult, now: DateTime<Local>) -> String {
        let id_ms = now.timestamp_millis().max(self.last_id_ms + 1);
        self.last_id_ms = id_ms;
        let id = id_ms.to_string();

        self.entries.push_back(HistoryEntry {
            id: id.clone(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            created_at: now,
            result,
        });

        if self.limit > 0 && self.entries.len() > self.limit {
            if let Some(evicted) = self.entries.pop_front() {
                debug!(id = %evicted.id, limit = self.limit, "evicted oldest history entry");
            }
        }

        id
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entry at `idx` in insertion order
    pub fn nth(&self, idx: usize) -> Option<&HistoryEntry> {
        self.entries.get(idx)
    }

    /// Insertion-order position of `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
