//! Application configuration.
//!
//! Settings live in `config.json` inside the per-user data directory (see
//! [`DataStorage`]). Both sections are optional; a missing file, or a missing
//! section, means defaults.
//!
//! ```json
//! {
//!   "intervals": { "pomodoro": 25, "short_break": 5, "long_break": 15 },
//!   "storage": { "backend": "sqlite" }
//! }
//! ```
//!
//! Durations are whole minutes. Zero or negative values fall back to the
//! defaults when the [`IntervalConfig`] is built.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::libs::config::Config;
//!
//! let config = Config::read()?;
//! let interval_config = config.interval_config()?;
//! println!("{:?}", interval_config);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::intervals::Intervals;
use crate::libs::engine::IntervalConfig;
use crate::libs::memory::InMemoryRepo;
use crate::libs::messages::Message;
use crate::libs::repository::Repository;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::TimeDelta;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::sync::Arc;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Planned length of each category, in minutes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IntervalsConfig {
    pub pomodoro: i64,
    pub short_break: i64,
    pub long_break: i64,
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        IntervalsConfig {
            pomodoro: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// History lasts as long as the process.
    #[default]
    Memory,
    /// History is kept in `pomo.db` next to the config file.
    Sqlite,
}

impl StorageBackend {
    const ALL: [StorageBackend; 2] = [StorageBackend::Memory, StorageBackend::Sqlite];

    fn label(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Sqlite => "sqlite",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervals: Option<IntervalsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

/// Out-of-range values become zero, which the engine replaces with its default.
fn minutes(value: i64) -> TimeDelta {
    TimeDelta::try_minutes(value).unwrap_or_default()
}

impl Config {
    /// Loads `config.json`, or the default config when the file is absent.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseFailed(e.to_string())))?;
        Ok(config)
    }

    /// Writes the config as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let default = config.intervals.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleIntervals);
        config.intervals = Some(IntervalsConfig {
            pomodoro: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPomodoroDuration.to_string())
                .default(default.pomodoro)
                .interact_text()?,
            short_break: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptShortBreakDuration.to_string())
                .default(default.short_break)
                .interact_text()?,
            long_break: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLongBreakDuration.to_string())
                .default(default.long_break)
                .interact_text()?,
        });

        let current = config.backend();
        msg_print!(Message::ConfigModuleStorage);
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageBackend.to_string())
            .items(&StorageBackend::ALL.iter().map(StorageBackend::label).collect::<Vec<_>>())
            .default(StorageBackend::ALL.iter().position(|b| *b == current).unwrap_or(0))
            .interact()?;
        config.storage = Some(StorageConfig {
            backend: StorageBackend::ALL[selected],
        });

        Ok(config)
    }

    pub fn backend(&self) -> StorageBackend {
        self.storage.as_ref().map(|s| s.backend).unwrap_or_default()
    }

    /// Opens the configured repository.
    pub fn repository(&self) -> Result<Arc<dyn Repository>> {
        let repo: Arc<dyn Repository> = match self.backend() {
            StorageBackend::Memory => Arc::new(InMemoryRepo::new()),
            StorageBackend::Sqlite => Arc::new(Intervals::new()?),
        };
        Ok(repo)
    }

    /// Engine configuration over the configured repository.
    pub fn interval_config(&self) -> Result<IntervalConfig> {
        let durations = self.intervals.clone().unwrap_or_default();

        Ok(IntervalConfig::new(
            self.repository()?,
            minutes(durations.pomodoro),
            minutes(durations.short_break),
            minutes(durations.long_break),
        ))
    }
}
