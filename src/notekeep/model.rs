use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pattern every note timestamp is written with.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single stored note.
///
/// `id` and `timestamp` are assigned once by [`Note::new`] and kept as opaque
/// text afterwards: whatever the store file holds is what gets written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub timestamp: String,
}

impl Note {
    pub fn new(title: String, category: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            category,
            content,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Parses `timestamp` back into a date, if it still has the expected shape.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    pub fn title_matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}
