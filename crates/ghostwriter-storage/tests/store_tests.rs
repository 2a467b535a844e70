use anyhow::Result;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tempfile::TempDir;

use ghostwriter_core::types::parse_date;
use ghostwriter_core::{JournalEntry, Mood};
use ghostwriter_storage::{
    seed_sample_data, FileJournalStore, JournalRepository, MemoryJournalStore,
};

const NAMESPACE: &str = "aiigood_journal";

fn entry(date: &str, mood: i64, note: &str) -> JournalEntry {
    JournalEntry::new(parse_date(date).unwrap(), Mood::new(mood).unwrap(), note)
}

fn day(date: &str) -> NaiveDate {
    parse_date(date).unwrap()
}

fn store_in(dir: &TempDir) -> FileJournalStore {
    FileJournalStore::new(dir.path().join("journal.json"), NAMESPACE)
}

#[tokio::test]
async fn test_missing_file_is_empty_journal() -> Result<()> {
    let dir = TempDir::new()?;
    let store = store_in(&dir);
    assert!(store.load_entries().await?.is_empty());
    assert!(store.is_empty().await?);
    assert!(store.get(day("2024-01-01")).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_upsert_keeps_one_entry_per_date() -> Result<()> {
    let dir = TempDir::new()?;
    let store = store_in(&dir);

    assert!(store.upsert(entry("2024-04-02", 2, "tired")).await?.is_none());
    store.upsert(entry("2024-04-01", 4, "good")).await?;
    let replaced = store
        .upsert(entry("2024-04-02", 5, "second wind").with_polished(Some("Radiant.".into())))
        .await?;
    assert_eq!(replaced.map(|e| e.note), Some("tired".to_string()));

    let entries = store.load_entries().await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, day("2024-04-01"));
    assert_eq!(entries[1].note, "second wind");
    assert_eq!(entries[1].polished_entry.as_deref(), Some("Radiant."));
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_only_that_date() -> Result<()> {
    let dir = TempDir::new()?;
    let store = store_in(&dir);
    store
        .save_entries(&[entry("2024-05-01", 3, "a"), entry("2024-05-02", 3, "b")])
        .await?;

    assert!(store.delete(day("2024-05-01")).await?);
    assert!(!store.delete(day("2024-05-01")).await?);
    let entries = store.load_entries().await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].note, "b");
    Ok(())
}

#[tokio::test]
async fn test_document_uses_namespace_and_camel_case() -> Result<()> {
    let dir = TempDir::new()?;
    let store = store_in(&dir);
    store
        .upsert(entry("2024-02-10", 4, "walk").with_polished(Some("Glimmers.".into())))
        .await?;

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(store.path())?)?;
    let record = &raw[NAMESPACE][0];
    assert_eq!(record["date"], "2024-02-10");
    assert_eq!(record["mood"], 4);
    assert_eq!(record["polishedEntry"], "Glimmers.");
    assert_eq!(record["rawEmotion"], "walk");
    assert!(record["timestamp"].is_string());
    assert!(!dir.path().join("journal.json.tmp").exists());
    Ok(())
}

#[tokio::test]
async fn test_legacy_records_are_migrated_on_load() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("journal.json");
    let document = json!({
        NAMESPACE: [
            {"date": "2023-12-01", "mood": 2, "note": "before timestamps"},
            {"date": "2023-12-02", "mood": 4, "note": "newer",
             "timestamp": "2023-12-02T21:00:00Z", "polishedEntry": "Glimmers of light."}
        ],
        "theme": "dark"
    });
    std::fs::write(&path, serde_json::to_string(&document)?)?;

    let store = FileJournalStore::new(&path, NAMESPACE);
    let entries = store.load_entries().await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].note, "before timestamps");
    assert!(entries[0].polished_entry.is_none());
    assert!(entries[1].has_reflection());

    // other keys in the document survive a save
    store.save_entries(&entries).await?;
    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(raw["theme"], "dark");
    assert!(raw[NAMESPACE][0]["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_bare_array_document_is_accepted() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("journal.json");
    std::fs::write(&path, r#"[{"date": "2024-07-07", "mood": 5, "note": "beach"}]"#)?;

    let store = FileJournalStore::new(&path, NAMESPACE);
    let entries = store.load_entries().await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood.value(), 5);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("journal.json");
    std::fs::write(&path, "{ not json")?;

    let store = FileJournalStore::new(&path, NAMESPACE);
    let err = store.load_entries().await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse journal file"));
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_location_is_an_error_not_an_empty_journal() -> Result<()> {
    let dir = TempDir::new()?;
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory")?;

    let store = FileJournalStore::new(blocker.join("journal.json"), NAMESPACE);
    let err = store.load_entries().await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to inspect journal file"));
    Ok(())
}

#[tokio::test]
async fn test_save_creates_parent_directories() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileJournalStore::new(dir.path().join("nested/deeper/journal.json"), NAMESPACE);
    store.upsert(entry("2024-03-03", 3, "fine")).await?;
    assert_eq!(store.load_entries().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_memory_store_behaves_like_file_store() -> Result<()> {
    let store = MemoryJournalStore::new();
    store.upsert(entry("2024-08-02", 1, "rough")).await?;
    store.upsert(entry("2024-08-01", 3, "ok")).await?;
    store.upsert(entry("2024-08-02", 2, "less rough")).await?;

    let entries = store.load_entries().await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, day("2024-08-01"));
    assert_eq!(entries[1].note, "less rough");
    assert!(store.delete(day("2024-08-01")).await?);
    assert_eq!(store.load_entries().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_seed_only_fills_an_empty_journal() -> Result<()> {
    let dir = TempDir::new()?;
    let store = store_in(&dir);
    let today = day("2024-09-30");
    let mut rng = StdRng::seed_from_u64(21);

    assert_eq!(seed_sample_data(&store, today, 14, &mut rng, false).await?, 14);
    assert_eq!(seed_sample_data(&store, today, 14, &mut rng, false).await?, 0);

    store.delete(today).await?;
    assert_eq!(seed_sample_data(&store, today, 14, &mut rng, true).await?, 14);
    let entries = store.load_entries().await?;
    assert_eq!(entries.len(), 14);
    assert_eq!(entries.last().map(|e| e.date), Some(today));
    Ok(())
}

#[tokio::test]
async fn test_seed_for_zero_days_keeps_existing_entries() -> Result<()> {
    let store = MemoryJournalStore::new();
    store.upsert(entry("2024-09-29", 4, "kept")).await?;
    let mut rng = StdRng::seed_from_u64(5);

    assert_eq!(seed_sample_data(&store, day("2024-09-30"), 0, &mut rng, true).await?, 0);
    let entries = store.load_entries().await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].note, "kept");
    Ok(())
}
