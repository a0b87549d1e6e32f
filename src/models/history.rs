use chrono::{DateTime, Local};

use super::QueryResult;

/// One completed query kept for comparison.
///
/// Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Millisecond submission timestamp rendered as a decimal string
    pub id: String,
    /// Display form of `created_at`
    pub timestamp: String,
    pub created_at: DateTime<Local>,
    pub result: QueryResult,
}
