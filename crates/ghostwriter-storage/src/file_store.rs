use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use ghostwriter_core::config::StorageConfig;
use ghostwriter_core::error::StorageError;
use ghostwriter_core::JournalEntry;

use crate::legacy::{migrate, StoredEntry};
use crate::repository::{normalize, JournalRepository};

/// Journal kept in a JSON document under a namespace key.
///
/// The document is an object such as `{"aiigood_journal": [...]}`; other
/// top-level keys are preserved on save. A bare array is also accepted on
/// load. A missing file reads as an empty journal.
#[derive(Debug, Clone)]
pub struct FileJournalStore {
    path: PathBuf,
    namespace: String,
}

impl FileJournalStore {
    pub fn new(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.journal_path, &config.namespace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Option<Value>> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| StorageError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Failed to inspect journal file {}", self.path.display()))?;
        if !exists {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let document = serde_json::from_str(&content)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))
            .with_context(|| format!("Failed to parse journal file {}", self.path.display()))?;
        Ok(Some(document))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "journal.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl JournalRepository for FileJournalStore {
    async fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let records = match self.read_document().await? {
            None => Value::Array(Vec::new()),
            Some(Value::Array(records)) => Value::Array(records),
            Some(Value::Object(mut document)) => document
                .remove(&self.namespace)
                .unwrap_or_else(|| Value::Array(Vec::new())),
            Some(other) => {
                return Err(StorageError::SerializationFailed(format!(
                    "expected an object or array, found {}",
                    other
                ))
                .into())
            }
        };

        let records: Vec<StoredEntry> = serde_json::from_value(records)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))
            .with_context(|| {
                format!(
                    "Malformed '{}' records in {}",
                    self.namespace,
                    self.path.display()
                )
            })?;
        let entries = normalize(migrate(records));
        debug!("Loaded {} entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    async fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        let mut document = match self.read_document().await? {
            Some(Value::Object(document)) => document,
            _ => Map::new(),
        };
        let records = serde_json::to_value(entries)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        document.insert(self.namespace.clone(), records);

        let content = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, content)
            .await
            .with_context(|| format!("Failed to write {}", temp.display()))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        info!("Saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
