//! Mood analytics over journal entries
//!
//! All functions take entries in any order unless noted; "recent" windows
//! follow the order the caller passes in, which for the store is date order.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{mood_emoji, JournalEntry, Mood};

/// Entries needed before a personalised insight is produced
pub const INSIGHT_MIN_ENTRIES: usize = 3;
/// Window of entries the insight looks at
pub const INSIGHT_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StreakInfo {
    pub current: u32,
    pub longest: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

/// Share of entries at one mood level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    pub percentage: u32,
}

/// Summary used by `stats` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalSummary {
    pub entries: usize,
    pub average_mood: Option<f64>,
    pub streaks: StreakInfo,
    pub distribution: Vec<MoodShare>,
    pub insight: Option<String>,
}

pub fn average_mood(entries: &[JournalEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: u32 = entries.iter().map(|e| e.mood.value() as u32).sum();
    Some(total as f64 / entries.len() as f64)
}

/// Current and longest runs of consecutive calendar days.
///
/// Entries are sorted by date first. A one-day step extends the run, a
/// larger gap restarts it at 1, and a repeated date leaves it unchanged.
/// `current` is the run ending at the latest entry.
pub fn streaks(entries: &[JournalEntry]) -> StreakInfo {
    let mut dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    dates.sort();

    let mut info = StreakInfo::default();
    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        match prev {
            None => info.current = 1,
            Some(p) => {
                let gap = (date - p).num_days();
                if gap == 1 {
                    info.current += 1;
                } else if gap > 1 {
                    info.current = 1;
                }
            }
        }
        info.longest = info.longest.max(info.current);
        prev = Some(date);
    }
    info
}

/// Percentage of entries per mood, omitting moods with no entries
pub fn mood_distribution(entries: &[JournalEntry]) -> Vec<MoodShare> {
    if entries.is_empty() {
        return Vec::new();
    }
    let total = entries.len() as f64;
    Mood::all()
        .filter_map(|mood| {
            let count = entries.iter().filter(|e| e.mood == mood).count();
            (count > 0).then(|| MoodShare {
                mood,
                count,
                percentage: ((count as f64 / total) * 100.0).round() as u32,
            })
        })
        .collect()
}

/// Render a distribution as `😢 20% 😊 80%`
pub fn format_distribution(shares: &[MoodShare]) -> String {
    shares
        .iter()
        .map(|s| format!("{} {}%", mood_emoji(s.mood.value() as i64), s.percentage))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compare the averages of the first and second half of the window
pub fn mood_trend(moods: &[u8]) -> MoodTrend {
    if moods.len() < 3 {
        return MoodTrend::Stable;
    }
    let (first, second) = moods.split_at(moods.len() / 2);
    let avg_first = mean(first);
    let avg_second = mean(second);

    if avg_second > avg_first + 0.5 {
        MoodTrend::Improving
    } else if avg_second < avg_first - 0.5 {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

/// `1 - variance / 4`, so identical moods score 1.0
pub fn consistency(moods: &[u8]) -> f64 {
    if moods.is_empty() {
        return 1.0;
    }
    let avg = mean(moods);
    let variance = moods
        .iter()
        .map(|&m| (m as f64 - avg).powi(2))
        .sum::<f64>()
        / moods.len() as f64;
    1.0 - variance / 4.0
}

fn mean(values: &[u8]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Short guidance text from the last seven entries (in the order given)
pub fn insight(entries: &[JournalEntry]) -> Option<&'static str> {
    if entries.is_empty() {
        return None;
    }
    if entries.len() < INSIGHT_MIN_ENTRIES {
        return Some("Keep logging your mood to unlock personalized insights!");
    }

    let start = entries.len().saturating_sub(INSIGHT_WINDOW);
    let moods: Vec<u8> = entries[start..].iter().map(|e| e.mood.value()).collect();
    let avg = mean(&moods);

    let text = if avg <= 2.0 {
        "You've been feeling low recently. Consider reaching out to friends or trying mindfulness exercises."
    } else if avg >= 4.0 {
        "Great consistent positive mood! Whatever you're doing, keep it up!"
    } else {
        match mood_trend(&moods) {
            MoodTrend::Improving => {
                "Your mood is trending upward! Reflect on what's been working well for you."
            }
            MoodTrend::Declining => {
                "Noticing a downward trend. Maybe time for some self-care activities?"
            }
            MoodTrend::Stable if consistency(&moods) > 0.7 => {
                "You maintain very consistent moods. This stability can be a great foundation for building habits."
            }
            MoodTrend::Stable => {
                "Your mood patterns show normal variation. Regular journaling helps build self-awareness."
            }
        }
    };
    Some(text)
}

/// The last `days` entries as (date, mood) points, oldest first
pub fn recent_series(entries: &[JournalEntry], days: usize) -> Vec<(chrono::NaiveDate, u8)> {
    let start = entries.len().saturating_sub(days);
    entries[start..]
        .iter()
        .map(|e| (e.date, e.mood.value()))
        .collect()
}

pub fn summarize(entries: &[JournalEntry]) -> JournalSummary {
    JournalSummary {
        entries: entries.len(),
        average_mood: average_mood(entries),
        streaks: streaks(entries),
        distribution: mood_distribution(entries),
        insight: insight(entries).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_band() {
        assert_eq!(mood_trend(&[1, 2]), MoodTrend::Stable);
        assert_eq!(mood_trend(&[2, 2, 4, 4]), MoodTrend::Improving);
        assert_eq!(mood_trend(&[4, 4, 2, 2]), MoodTrend::Declining);
        // 3.0 vs 3.5: inside the band
        assert_eq!(mood_trend(&[3, 3, 4]), MoodTrend::Stable);
    }

    #[test]
    fn test_consistency_of_flat_series() {
        assert_eq!(consistency(&[3, 3, 3]), 1.0);
        assert!((consistency(&[1, 5]) - 0.0).abs() < f64::EPSILON);
    }
}
