//! Journal entry value types shared by the store, the CLI and the browser.

use crate::mood::Mood;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One journaled mood record as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i32,
    /// 0..=10
    pub intensity: u8,
    pub mood: Mood,
    pub message: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the user when adding or amending an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub intensity: u8,
    pub mood: Mood,
    pub message: String,
    pub tags: Vec<String>,
}

/// One window of query results plus the size of the full match set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPage {
    pub entries: Vec<Entry>,
    pub total_matching: usize,
}

impl EntryPage {
    pub fn empty() -> Self {
        Self::default()
    }
}
