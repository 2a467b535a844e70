use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;
use serde_json::json;

use ghostwriter_core::types::parse_date;
use ghostwriter_core::{EnhanceContext, JournalEntry, Mood};
use ghostwriter_engine::CacheStats;

use super::{note_arg, CommandHandler, CommandResult};
use crate::output::format_entry_detail;
use crate::session::Session;

/// Entries handed to the enhancer as context when writing
const CONTEXT_ENTRIES: usize = 3;

/// Create or replace a day's entry, with a reflection unless disabled
pub struct WriteCommand;

impl WriteCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WriteCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for WriteCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let mood = Mood::new(*matches.get_one::<i64>("mood").context("missing mood")?)?;
        let note = note_arg(matches, session.config.journal.max_note_chars)?;
        let date = match matches.get_one::<String>("date") {
            Some(raw) => parse_date(raw)?,
            None => session.today(),
        };

        let polished = if matches.get_flag("no-enhance") {
            None
        } else {
            let existing = session.store.load_entries().await?;
            let recent = &existing[existing.len().saturating_sub(CONTEXT_ENTRIES)..];
            let context = EnhanceContext::new()
                .with_previous_entries(recent)
                .with_time_of_day(session.hour());
            session
                .enhancer
                .enhance(&note, mood.value() as i64, &context)
                .await
        };

        let entry = JournalEntry::new(date, mood, note).with_polished(polished);
        let replaced = session.store.upsert(entry.clone()).await?.is_some();
        debug!("Wrote entry for {} (replaced: {})", date, replaced);

        let status = if replaced { "updated" } else { "saved" };
        let headline = match (replaced, entry.polished_entry.is_some()) {
            (true, true) => "Entry updated with poetic reflection",
            (true, false) => "Entry updated",
            (false, true) => "Entry saved with poetic reflection",
            (false, false) => "Entry saved",
        };

        Ok(CommandResult::success_with_message(format!(
            "{}\n\n{}",
            headline,
            format_entry_detail(&entry)
        ))
        .with_data(json!({
            "status": status,
            "entry": entry,
        })))
    }
}

/// Show the reflection a note would receive, without touching the journal
pub struct PreviewCommand;

impl PreviewCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PreviewCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for PreviewCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        // Off-scale moods pass through; the enhancer maps them to the midpoint
        let mood = *matches.get_one::<i64>("mood").context("missing mood")?;
        let note = note_arg(matches, session.config.journal.max_note_chars)?;

        let context = EnhanceContext::preview().with_time_of_day(session.hour());
        match session.enhancer.enhance_reflection(&note, mood, &context).await {
            None => Ok(CommandResult::success_with_message(
                "Ghost Writer is disabled...".to_string(),
            )
            .with_data(json!({ "reflection": null }))),
            Some(reflection) => Ok(CommandResult::success_with_message(format!(
                "✨ Ghost Writer Preview\n{}",
                reflection.text
            ))
            .with_data(json!({
                "reflection": reflection.text,
                "source": reflection.source,
                "cache": cache_summary(session.enhancer.cache_stats()),
            }))),
        }
    }
}

fn cache_summary(stats: CacheStats) -> serde_json::Value {
    json!({
        "hits": stats.hits,
        "misses": stats.misses,
        "fallbacks": stats.fallbacks,
        "entries": stats.entries,
        "hit_rate": stats.hit_rate(),
    })
}
