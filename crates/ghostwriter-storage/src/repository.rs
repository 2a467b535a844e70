use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

use ghostwriter_core::JournalEntry;

/// Persistence for journal entries, keyed by calendar date.
///
/// Implementors provide whole-journal load and save; the per-date
/// operations are built on those two and keep at most one entry per date.
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// All entries, oldest first
    async fn load_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Replace the stored journal with `entries`
    async fn save_entries(&self, entries: &[JournalEntry]) -> Result<()>;

    async fn get(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        let entries = self.load_entries().await?;
        Ok(entries.into_iter().find(|e| e.date == date))
    }

    /// Insert or replace the entry for `entry.date`, returning the one replaced
    async fn upsert(&self, entry: JournalEntry) -> Result<Option<JournalEntry>> {
        let mut entries = self.load_entries().await?;
        let replaced = match entries.iter().position(|e| e.date == entry.date) {
            Some(index) => Some(std::mem::replace(&mut entries[index], entry)),
            None => {
                entries.push(entry);
                None
            }
        };
        self.save_entries(&normalize(entries)).await?;
        Ok(replaced)
    }

    /// Remove the entry for `date`; false when there was none
    async fn delete(&self, date: NaiveDate) -> Result<bool> {
        let mut entries = self.load_entries().await?;
        let before = entries.len();
        entries.retain(|e| e.date != date);
        if entries.len() == before {
            debug!("No entry to delete for {}", date);
            return Ok(false);
        }
        self.save_entries(&entries).await?;
        Ok(true)
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.load_entries().await?.is_empty())
    }
}

/// Sort by date and collapse duplicates; the later record for a date wins
pub fn normalize(entries: Vec<JournalEntry>) -> Vec<JournalEntry> {
    let mut by_date = BTreeMap::new();
    for entry in entries {
        by_date.insert(entry.date, entry);
    }
    by_date.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostwriter_core::types::parse_date;
    use ghostwriter_core::Mood;

    fn entry(date: &str, mood: i64, note: &str) -> JournalEntry {
        JournalEntry::new(parse_date(date).unwrap(), Mood::new(mood).unwrap(), note)
    }

    #[test]
    fn test_normalize_sorts_and_dedupes() {
        let entries = vec![
            entry("2024-03-03", 2, "third"),
            entry("2024-03-01", 4, "first"),
            entry("2024-03-03", 5, "third again"),
        ];
        let normalized = normalize(entries);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].note, "first");
        assert_eq!(normalized[1].note, "third again");
    }
}
