/// CLI command modules for organized functionality
pub mod config;
pub mod entries;
pub mod insights;
pub mod seed;
pub mod write;


use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;

use ghostwriter_core::error::{StorageError, ValidationError};
use ghostwriter_core::types::parse_date;

use crate::session::Session;

/// Trait for CLI command handlers
#[allow(async_fn_in_trait)]
pub trait CommandHandler {
    /// Execute the command with the given arguments and session
    async fn execute(&self, matches: &ArgMatches, session: &mut Session) -> Result<CommandResult>;
}

/// Command execution result
#[derive(Debug)]
pub struct CommandResult {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
        }
    }

    pub fn success_with_message(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }

    /// Attach machine-readable output to a result
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Required positional `date` argument
pub(crate) fn date_arg(matches: &ArgMatches) -> Result<NaiveDate> {
    let raw = matches
        .get_one::<String>("date")
        .context("missing date argument")?;
    Ok(parse_date(raw)?)
}

/// Trimmed note text, rejected when longer than `max_chars`
pub(crate) fn note_arg(matches: &ArgMatches, max_chars: usize) -> Result<String> {
    let note = matches
        .get_one::<String>("note")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let length = note.chars().count();
    if length > max_chars {
        return Err(ValidationError::NoteTooLong {
            length,
            max_length: max_chars,
        }
        .into());
    }
    Ok(note)
}

pub(crate) fn not_found(date: NaiveDate) -> anyhow::Error {
    StorageError::NotFound(date.to_string()).into()
}
