use anyhow::Result;
use clap::ArgMatches;
use serde_json::json;

use ghostwriter_core::analytics::{recent_series, summarize};

use super::{CommandHandler, CommandResult};
use crate::output::{format_chart, format_summary};
use crate::session::Session;

/// Average mood, streaks, distribution and insight
pub struct StatsCommand;

impl StatsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for StatsCommand {
    async fn execute(&self, _matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let entries = session.store.load_entries().await?;
        let summary = summarize(&entries);
        Ok(CommandResult::success_with_message(format_summary(&summary))
            .with_data(serde_json::to_value(&summary)?))
    }
}

pub struct ChartCommand;

impl ChartCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChartCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for ChartCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        let days = matches
            .get_one::<usize>("days")
            .copied()
            .unwrap_or(session.config.journal.chart_days);
        let entries = session.store.load_entries().await?;
        let series = recent_series(&entries, days);

        let points: Vec<_> = series
            .iter()
            .map(|(date, mood)| json!({ "date": date.to_string(), "mood": mood }))
            .collect();
        Ok(CommandResult::success_with_message(format_chart(&series))
            .with_data(json!({ "points": points })))
    }
}
