use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

const MOOD_EMOJIS: [&str; 5] = ["😢", "😔", "😐", "😊", "😄"];
const MOOD_LABELS: [&str; 5] = ["Bad", "Sad", "Neutral", "Happy", "Great"];

/// A validated mood rating on the 1..=5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Mood(value as u8))
        } else {
            Err(ValidationError::MoodOutOfRange(value))
        }
    }

    /// Clamp any integer onto the scale
    pub fn saturating(value: i64) -> Self {
        Mood(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn emoji(self) -> &'static str {
        mood_emoji(self.0 as i64)
    }

    pub fn label(self) -> &'static str {
        mood_label(self.0 as i64)
    }

    /// All five moods, lowest first
    pub fn all() -> impl Iterator<Item = Mood> {
        (Self::MIN..=Self::MAX).map(Mood)
    }
}

impl TryFrom<i64> for Mood {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Mood::new(value)
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// Emoji for a raw mood value, `❓` outside the scale
pub fn mood_emoji(mood: i64) -> &'static str {
    scale_index(mood).map(|i| MOOD_EMOJIS[i]).unwrap_or("❓")
}

/// Label for a raw mood value, `Unknown` outside the scale
pub fn mood_label(mood: i64) -> &'static str {
    scale_index(mood).map(|i| MOOD_LABELS[i]).unwrap_or("Unknown")
}

fn scale_index(mood: i64) -> Option<usize> {
    if (1..=5).contains(&mood) {
        Some((mood - 1) as usize)
    } else {
        None
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// One journal record; the store keeps at most one per date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub note: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub polished_entry: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub raw_emotion: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, mood: Mood, note: impl Into<String>) -> Self {
        let note = note.into();
        Self {
            date,
            mood,
            raw_emotion: note.clone(),
            note,
            emotions: Vec::new(),
            tags: Vec::new(),
            polished_entry: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_polished(mut self, polished: Option<String>) -> Self {
        self.polished_entry = polished;
        self
    }

    /// True when a reflection exists and differs from the raw note
    pub fn has_reflection(&self) -> bool {
        self.polished_entry
            .as_deref()
            .map(|p| p != self.note)
            .unwrap_or(false)
    }
}

/// Open bag of optional hints passed alongside an enhancement request.
///
/// The enhancer accepts any content here and does not consult it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhanceContext {
    #[serde(flatten)]
    hints: Map<String, Value>,
}

impl EnhanceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview() -> Self {
        Self::new().with_hint("preview", Value::Bool(true))
    }

    pub fn regeneration() -> Self {
        Self::new().with_hint("regeneration", Value::Bool(true))
    }

    pub fn with_hint(mut self, key: impl Into<String>, value: Value) -> Self {
        self.hints.insert(key.into(), value);
        self
    }

    pub fn with_time_of_day(self, hour: u32) -> Self {
        self.with_hint("timeOfDay", Value::from(hour))
    }

    /// Records date and mood of earlier entries; notes are not copied
    pub fn with_previous_entries(self, entries: &[JournalEntry]) -> Self {
        let summary = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "date": e.date.to_string(),
                    "mood": e.mood.value(),
                })
            })
            .collect();
        self.with_hint("previousEntries", Value::Array(summary))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.hints.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_bounds() {
        assert!(Mood::new(0).is_err());
        assert!(Mood::new(6).is_err());
        assert_eq!(Mood::new(1).unwrap().value(), 1);
        assert_eq!(Mood::new(5).unwrap().value(), 5);
        assert_eq!(Mood::all().count(), 5);
        assert_eq!(Mood::saturating(-4).value(), 1);
        assert_eq!(Mood::saturating(9).value(), 5);
    }

    #[test]
    fn test_mood_labels() {
        assert_eq!(mood_emoji(1), "😢");
        assert_eq!(mood_label(4), "Happy");
        assert_eq!(mood_emoji(7), "❓");
        assert_eq!(mood_label(0), "Unknown");
    }

    #[test]
    fn test_has_reflection_ignores_identical_text() {
        let date = parse_date("2024-05-01").unwrap();
        let entry = JournalEntry::new(date, Mood::new(3).unwrap(), "same");
        assert!(!entry.has_reflection());
        assert!(!entry.clone().with_polished(Some("same".into())).has_reflection());
        assert!(entry.with_polished(Some("other".into())).has_reflection());
    }
}
