use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use ghostwriter_core::JournalEntry;

use crate::repository::{normalize, JournalRepository};

/// Process-local journal, used for previews and tests
#[derive(Debug, Default)]
pub struct MemoryJournalStore {
    entries: RwLock<Vec<JournalEntry>>,
}

impl MemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JournalRepository for MemoryJournalStore {
    async fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        *self.entries.write().await = normalize(entries.to_vec());
        Ok(())
    }
}
