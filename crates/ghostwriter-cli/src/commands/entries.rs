use anyhow::Result;
use clap::ArgMatches;
use log::info;
use serde_json::json;

use ghostwriter_core::EnhanceContext;

use super::{date_arg, not_found, CommandHandler, CommandResult};
use crate::output::{format_entry_detail, format_entry_line};
use crate::session::Session;

pub struct ListCommand;

impl ListCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for ListCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let mut entries = session.store.load_entries().await?;
        entries.reverse();
        if let Some(limit) = matches.get_one::<usize>("limit") {
            entries.truncate(*limit);
        }

        let message = if entries.is_empty() {
            "No entries yet. Start with `ghostwriter write --mood 3` or `ghostwriter seed`."
                .to_string()
        } else {
            let lines: Vec<String> = entries.iter().map(format_entry_line).collect();
            format!("Journal ({} shown)\n{}", entries.len(), lines.join("\n"))
        };

        Ok(CommandResult::success_with_message(message).with_data(json!({ "entries": entries })))
    }
}

pub struct ShowCommand;

impl ShowCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShowCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for ShowCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let date = date_arg(matches)?;
        let entry = session.store.get(date).await?.ok_or_else(|| not_found(date))?;
        Ok(
            CommandResult::success_with_message(format_entry_detail(&entry))
                .with_data(json!({ "entry": entry })),
        )
    }
}

pub struct DeleteCommand;

impl DeleteCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeleteCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for DeleteCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let date = date_arg(matches)?;
        if !session.store.delete(date).await? {
            return Err(not_found(date));
        }
        info!("Deleted entry for {}", date);
        Ok(CommandResult::success_with_message(format!("Entry for {} deleted", date))
            .with_data(json!({ "deleted": date.to_string() })))
    }
}

/// Replace an entry's reflection with a freshly generated one
pub struct RegenerateCommand;

impl RegenerateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegenerateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for RegenerateCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let date = date_arg(matches)?;
        let mut entry = session.store.get(date).await?.ok_or_else(|| not_found(date))?;

        if !session.enhancer.is_enabled() {
            return Ok(CommandResult::error(
                "Ghost Writer is disabled; enable it to regenerate reflections".to_string(),
            ));
        }

        let reflection = session
            .enhancer
            .enhance(&entry.note, entry.mood.value() as i64, &EnhanceContext::regeneration())
            .await;
        entry.polished_entry = reflection;
        session.store.upsert(entry.clone()).await?;

        Ok(CommandResult::success_with_message(format!(
            "Entry regenerated with new perspective\n\n{}",
            format_entry_detail(&entry)
        ))
        .with_data(json!({ "entry": entry })))
    }
}
