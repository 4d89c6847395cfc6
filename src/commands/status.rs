use crate::libs::category::next_category;
use crate::libs::config::{Config, StorageBackend};
use crate::libs::error::IntervalError;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;

/// Shows the most recent interval and, once it is finished, what comes next.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    if config.backend() == StorageBackend::Memory {
        msg_warning!(Message::MemoryStorageNotShared);
    }

    let interval_config = config.interval_config()?;
    let repo = interval_config.repository();

    let interval = match repo.last() {
        Ok(interval) => interval,
        Err(IntervalError::NoIntervals) => {
            msg_info!(Message::NoIntervalsYet);
            msg_info!(Message::NextIntervalCategory(next_category(repo)?.to_string()));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    msg_print!(Message::IntervalStatusHeader, true);
    View::interval(&interval)?;

    if interval.state.is_terminal() {
        msg_info!(Message::IntervalsCompletedHint);
        msg_info!(Message::NextIntervalCategory(next_category(repo)?.to_string()));
    }

    Ok(())
}
