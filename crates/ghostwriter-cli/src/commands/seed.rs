use anyhow::Result;
use clap::ArgMatches;
use serde_json::json;

use ghostwriter_storage::seed_sample_data;

use super::{CommandHandler, CommandResult};
use crate::session::Session;

/// Fill an empty journal with demonstration entries
pub struct SeedCommand;

impl SeedCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SeedCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for SeedCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let force = matches.get_flag("force");
        let mut rng = session.rng();
        let written = seed_sample_data(
            session.store.as_ref(),
            session.today(),
            session.config.journal.sample_days,
            &mut rng,
            force,
        )
        .await?;

        let message = if written == 0 {
            "Journal already has entries; use --force to replace them with sample data".to_string()
        } else {
            format!("Added {} days of sample entries", written)
        };
        Ok(CommandResult::success_with_message(message).with_data(json!({ "seeded": written })))
    }
}
