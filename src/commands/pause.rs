use crate::libs::config::{Config, StorageBackend};
use crate::libs::error::IntervalError;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;

/// Pauses the most recent interval if it is running.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    if config.backend() == StorageBackend::Memory {
        msg_warning!(Message::MemoryStorageNotShared);
    }

    let interval_config = config.interval_config()?;
    let interval = match interval_config.repository().last() {
        Ok(interval) => interval,
        Err(IntervalError::NoIntervals) => {
            msg_info!(Message::NoIntervalToPause);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match interval.pause(&interval_config) {
        Ok(()) => {
            msg_success!(Message::IntervalPaused(interval.category.to_string(), format_duration(&interval.actual_duration)));
            Ok(())
        }
        Err(IntervalError::IntervalNotRunning) => {
            msg_info!(Message::NoIntervalToPause);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
