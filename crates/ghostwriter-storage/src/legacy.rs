//! On-disk record shape, tolerant of entries written before timestamps
//! and reflections existed.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;

use ghostwriter_core::types::parse_date;
use ghostwriter_core::{GhostwriterResult, JournalEntry, Mood};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntry {
    pub date: String,
    pub mood: i64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub polished_entry: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub raw_emotion: Option<String>,
}

impl StoredEntry {
    /// Convert to a current entry.
    ///
    /// A record without a timestamp is rebuilt from date, mood and note
    /// only, stamped with the current time.
    pub fn into_entry(self) -> GhostwriterResult<JournalEntry> {
        let date = parse_date(&self.date)?;
        let mood = Mood::new(self.mood)?;

        let Some(timestamp) = self.timestamp else {
            debug!("Migrating legacy record for {}", date);
            return Ok(JournalEntry::new(date, mood, self.note));
        };

        Ok(JournalEntry {
            date,
            mood,
            raw_emotion: self.raw_emotion.unwrap_or_else(|| self.note.clone()),
            note: self.note,
            emotions: self.emotions,
            tags: self.tags,
            polished_entry: self.polished_entry,
            timestamp,
        })
    }
}

/// Convert stored records, dropping the ones that fail validation
pub fn migrate(records: Vec<StoredEntry>) -> Vec<JournalEntry> {
    records
        .into_iter()
        .filter_map(|record| {
            let date = record.date.clone();
            match record.into_entry() {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping stored record for '{}': {}", date, e);
                    None
                }
            }
        })
        .collect()
}
