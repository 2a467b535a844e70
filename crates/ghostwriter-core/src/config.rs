use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Centralized configuration for the ghostwriter workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostwriterConfig {
    /// Application-wide settings
    pub app: AppConfig,

    /// Reflection enhancer settings
    pub enhancer: EnhancerConfig,

    /// Journal persistence settings
    pub storage: StorageConfig,

    /// Journal input limits and sample data
    pub journal: JournalConfig,
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
}

/// Reflection enhancer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub enabled: bool,
    /// Fixed part of the simulated generation latency
    pub latency_base_ms: u64,
    /// Upper bound (exclusive) of the random extra latency
    pub latency_jitter_ms: u64,
    /// Seed for template selection; entropy when absent
    pub seed: Option<u64>,
}

/// Journal persistence configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub journal_path: PathBuf,
    /// Top-level key the entry array is stored under
    pub namespace: String,
}

/// Journal input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub max_note_chars: usize,
    pub sample_days: u32,
    pub chart_days: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "ghostwriter".to_string(),
        }
    }
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            latency_base_ms: 1000,
            latency_jitter_ms: 1500,
            seed: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            journal_path: PathBuf::from("./journal.json"),
            namespace: "aiigood_journal".to_string(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            max_note_chars: 500,
            sample_days: 14,
            chart_days: 14,
        }
    }
}

impl Default for GhostwriterConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            enhancer: EnhancerConfig::default(),
            storage: StorageConfig::default(),
            journal: JournalConfig::default(),
        }
    }
}

impl EnhancerConfig {
    pub fn latency_base(&self) -> Duration {
        Duration::from_millis(self.latency_base_ms)
    }

    pub fn latency_jitter(&self) -> Duration {
        Duration::from_millis(self.latency_jitter_ms)
    }
}

pub const CONFIG_PATH_ENV: &str = "GHOSTWRITER_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "./ghostwriter.json";

/// Configuration manager for loading, overriding and validating configuration
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from an explicit path, `GHOSTWRITER_CONFIG_PATH`,
    /// or the default location, then apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<GhostwriterConfig> {
        let config_path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_config_path);

        let mut config = if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            Self::load_file(&config_path)?
        } else {
            if explicit.is_some() {
                return Err(ConfigError::InvalidFormat(format!(
                    "configuration file {} does not exist",
                    config_path.display()
                ))
                .into());
            }
            GhostwriterConfig::default()
        };

        Self::apply_env_overrides(&mut config)?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Parse a JSON or TOML configuration file, chosen by extension
    pub fn load_file(path: &Path) -> Result<GhostwriterConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GhostwriterConfig = if Self::is_toml(path) {
            toml::from_str(&content)
                .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?
        };
        Ok(config)
    }

    /// Get the configuration file path from environment or default
    fn get_config_path() -> PathBuf {
        env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    fn is_toml(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some("toml")
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut GhostwriterConfig) -> Result<()> {
        if let Ok(enabled) = env::var("GHOSTWRITER_ENHANCER_ENABLED") {
            config.enhancer.enabled = parse_env("GHOSTWRITER_ENHANCER_ENABLED", &enabled)?;
        }

        if let Ok(base) = env::var("GHOSTWRITER_LATENCY_BASE_MS") {
            config.enhancer.latency_base_ms = parse_env("GHOSTWRITER_LATENCY_BASE_MS", &base)?;
        }

        if let Ok(jitter) = env::var("GHOSTWRITER_LATENCY_JITTER_MS") {
            config.enhancer.latency_jitter_ms =
                parse_env("GHOSTWRITER_LATENCY_JITTER_MS", &jitter)?;
        }

        if let Ok(seed) = env::var("GHOSTWRITER_SEED") {
            config.enhancer.seed = Some(parse_env("GHOSTWRITER_SEED", &seed)?);
        }

        if let Ok(path) = env::var("GHOSTWRITER_JOURNAL_PATH") {
            config.storage.journal_path = PathBuf::from(path);
        }

        Ok(())
    }

    /// Save configuration to the given path
    pub fn save_config(config: &GhostwriterConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = if Self::is_toml(path) {
            toml::to_string_pretty(config)?
        } else {
            serde_json::to_string_pretty(config)?
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate_config(config: &GhostwriterConfig) -> Result<()> {
        if config.storage.namespace.trim().is_empty() {
            return Err(invalid("storage.namespace", "", "a non-empty key").into());
        }

        if config.storage.journal_path.as_os_str().is_empty() {
            return Err(invalid("storage.journal_path", "", "a file path").into());
        }

        if config.journal.max_note_chars == 0 {
            return Err(invalid("journal.max_note_chars", "0", "a positive limit").into());
        }

        if config.journal.chart_days == 0 {
            return Err(invalid("journal.chart_days", "0", "at least one day").into());
        }

        if config.journal.sample_days == 0 {
            return Err(invalid("journal.sample_days", "0", "at least one day").into());
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvironmentResolution(format!("{}={}", name, raw)))
}

fn invalid(parameter: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        parameter: parameter.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}
