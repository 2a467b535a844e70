use anyhow::Result;
use ghostwriter_core::types::{parse_date, EnhanceContext, JournalEntry, Mood};

/// Unit tests for core types
/// Tests entry creation, serialization and the context bag

#[test]
fn test_entry_creation_copies_raw_note() -> Result<()> {
    let date = parse_date("2024-02-29")?;
    let entry = JournalEntry::new(date, Mood::new(2)?, "Feeling a bit tired today");

    assert_eq!(entry.note, "Feeling a bit tired today");
    assert_eq!(entry.raw_emotion, entry.note);
    assert!(entry.polished_entry.is_none());
    assert!(entry.emotions.is_empty());
    assert!(entry.tags.is_empty());

    Ok(())
}

#[test]
fn test_entry_serializes_with_camel_case_fields() -> Result<()> {
    let date = parse_date("2024-03-10")?;
    let entry = JournalEntry::new(date, Mood::new(4)?, "Great workout session")
        .with_polished(Some("Bubbling presence.".to_string()));

    let json = serde_json::to_value(&entry)?;
    assert_eq!(json["date"], "2024-03-10");
    assert_eq!(json["mood"], 4);
    assert_eq!(json["polishedEntry"], "Bubbling presence.");
    assert_eq!(json["rawEmotion"], "Great workout session");
    assert!(json["timestamp"].is_string());

    let back: JournalEntry = serde_json::from_value(json)?;
    assert_eq!(back, entry);

    Ok(())
}

#[test]
fn test_entry_rejects_out_of_range_mood() {
    let raw = serde_json::json!({
        "date": "2024-03-10",
        "mood": 9,
        "note": "x",
        "timestamp": "2024-03-10T08:00:00Z"
    });
    let parsed: Result<JournalEntry, _> = serde_json::from_value(raw);
    assert!(parsed.is_err());
}

#[test]
fn test_null_polished_entry_reads_as_none() -> Result<()> {
    let raw = serde_json::json!({
        "date": "2024-03-11",
        "mood": 3,
        "note": "Restful day at home",
        "emotions": [],
        "tags": [],
        "polishedEntry": null,
        "timestamp": "2024-03-11T21:15:00Z",
        "rawEmotion": "Restful day at home"
    });
    let entry: JournalEntry = serde_json::from_value(raw)?;
    assert!(entry.polished_entry.is_none());
    assert!(!entry.has_reflection());
    Ok(())
}

#[test]
fn test_parse_date_rejects_garbage() {
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("yesterday").is_err());
    assert!(parse_date(" 2024-01-05 ").is_ok());
}

#[test]
fn test_context_accepts_arbitrary_hints() -> Result<()> {
    let date = parse_date("2024-01-01")?;
    let previous = vec![JournalEntry::new(date, Mood::new(5)?, "private words")];

    let ctx = EnhanceContext::preview()
        .with_time_of_day(21)
        .with_previous_entries(&previous)
        .with_hint("weather", serde_json::json!({"sky": "grey"}));

    assert_eq!(ctx.get("preview"), Some(&serde_json::Value::Bool(true)));
    assert_eq!(ctx.get("timeOfDay"), Some(&serde_json::json!(21)));
    assert_eq!(ctx.get("previousEntries").unwrap()[0]["mood"], 5);
    assert!(!ctx.get("previousEntries").unwrap().to_string().contains("private words"));
    assert!(EnhanceContext::new().is_empty());

    Ok(())
}
