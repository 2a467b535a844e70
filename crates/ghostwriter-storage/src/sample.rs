use anyhow::Result;
use chrono::{Duration, NaiveDate};
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use ghostwriter_core::{JournalEntry, Mood};

use crate::repository::JournalRepository;

pub const SAMPLE_NOTES: [&str; 7] = [
    "Productive day at work",
    "Feeling a bit tired today",
    "Great workout session",
    "Spent time with family",
    "Working on personal projects",
    "Restful day at home",
    "Social gathering with friends",
];

/// Demonstration entries for the `days` days ending at `today`, oldest first.
///
/// Moods follow a gentle sine wave around the midpoint with up to half a
/// point of noise either way.
pub fn sample_entries<R: Rng + ?Sized>(today: NaiveDate, days: u32, rng: &mut R) -> Vec<JournalEntry> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let wave = 3.0 + (offset as f64 * 0.5).sin() * 1.5;
            let mood = Mood::saturating((wave + (rng.gen::<f64>() - 0.5)).round() as i64);
            let note = SAMPLE_NOTES.choose(rng).copied().unwrap_or(SAMPLE_NOTES[0]);
            JournalEntry::new(date, mood, note)
        })
        .collect()
}

/// Write sample data when the journal is empty, or unconditionally with
/// `force`. Returns how many entries were written.
pub async fn seed_sample_data<R: Rng + ?Sized>(
    repository: &dyn JournalRepository,
    today: NaiveDate,
    days: u32,
    rng: &mut R,
    force: bool,
) -> Result<usize> {
    if days == 0 {
        warn!("Sample data requested for zero days; leaving journal untouched");
        return Ok(0);
    }
    if !force && !repository.is_empty().await? {
        info!("Journal already has entries; skipping sample data");
        return Ok(0);
    }
    let entries = sample_entries(today, days, rng);
    repository.save_entries(&entries).await?;
    info!("Seeded {} sample entries", entries.len());
    Ok(entries.len())
}
