use anyhow::{anyhow, Result};
use clap::ArgMatches;
use serde_json::json;
use std::path::PathBuf;

use ghostwriter_core::config::{ConfigManager, GhostwriterConfig, DEFAULT_CONFIG_PATH};

use super::{CommandHandler, CommandResult};
use crate::error::CliError;
use crate::session::Session;

/// `config show` and `config init`
pub struct ConfigCommand;

impl ConfigCommand {
    pub fn new() -> Self {
        Self
    }

    fn show(session: &Session) -> Result<CommandResult> {
        let data = serde_json::to_value(&session.config)?;
        let text = serde_json::to_string_pretty(&data)?;
        Ok(CommandResult::success_with_message(format!("Effective configuration\n{}", text))
            .with_data(data))
    }

    fn init(matches: &ArgMatches) -> Result<CommandResult> {
        let path = matches
            .get_one::<PathBuf>("path")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if path.exists() && !matches.get_flag("force") {
            return Err(CliError::Config(format!(
                "{} already exists; pass --force to overwrite",
                path.display()
            ))
            .into());
        }

        ConfigManager::save_config(&GhostwriterConfig::default(), &path)?;
        Ok(CommandResult::success_with_message(format!(
            "Wrote default configuration to {}",
            path.display()
        ))
        .with_data(json!({ "path": path.display().to_string() })))
    }
}

impl Default for ConfigCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for ConfigCommand {
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult> {
        match matches.subcommand() {
            Some(("show", _)) => Self::show(session),
            Some(("init", sub_matches)) => Self::init(sub_matches),
            other => Err(anyhow!("unknown config subcommand: {:?}", other.map(|(name, _)| name))),
        }
    }
}
