//! Text for every [`Message`] variant.
//!
//! Durations arrive already formatted as `MM:SS`; this module only places
//! them into sentences.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === INTERVAL MESSAGES ===
            Message::IntervalStarted(category, planned) => format!("{} started ({})", category, planned),
            Message::IntervalResumed(category, elapsed, planned) => format!("{} resumed at {} of {}", category, elapsed, planned),
            Message::IntervalTick(category, elapsed, planned) => format!("{} {} / {}", category, elapsed, planned),
            Message::IntervalCompleted(category) => format!("{} completed", category),
            Message::IntervalCancelled(category) => format!("{} cancelled", category),
            Message::IntervalPaused(category, elapsed) => format!("{} paused at {}", category, elapsed),
            Message::IntervalAlreadyRunning(id) => format!("Interval {} is already running", id),
            Message::IntervalsCompletedHint => "The last interval is finished. Run `pomo start` to begin the next one.".to_string(),
            Message::NoIntervalToPause => "No running interval to pause".to_string(),
            Message::NoIntervalsYet => "No intervals recorded yet".to_string(),
            Message::NextIntervalCategory(category) => format!("Next interval: {}", category),
            Message::IntervalStatusHeader => "Current interval".to_string(),
            Message::CtrlCListenFailed(error) => format!("Failed to listen for Ctrl-C: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found, nothing to delete".to_string(),
            Message::ConfigParseFailed(error) => format!("Failed to parse config.json: {}", error),
            Message::ConfigModuleIntervals => "Interval durations (minutes)".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::MemoryStorageNotShared => "In-memory storage is not shared between commands. Run `pomo init` and pick sqlite to pause or inspect intervals from another terminal.".to_string(),

            // === PROMPTS ===
            Message::PromptPomodoroDuration => "Pomodoro duration".to_string(),
            Message::PromptShortBreakDuration => "Short break duration".to_string(),
            Message::PromptLongBreakDuration => "Long break duration".to_string(),
            Message::PromptStorageBackend => "Where should intervals be stored?".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
