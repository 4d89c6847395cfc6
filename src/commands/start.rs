//! Runs the current interval in the foreground.
//!
//! Resumes an unfinished interval or creates the next one, then prints its
//! progress once per second until it completes. Ctrl-C cancels the interval;
//! `pomo pause` from another terminal pauses it (sqlite storage only).

use crate::libs::config::Config;
use crate::libs::engine::{get_or_create, Callbacks};
use crate::libs::formatter::format_duration;
use crate::libs::interval::{Interval, IntervalState};
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use tokio_util::sync::CancellationToken;

pub async fn cmd() -> Result<()> {
    let interval_config = Config::read()?.interval_config()?;
    let interval = get_or_create(&interval_config)?;

    if interval.state == IntervalState::Running {
        msg_warning!(Message::IntervalAlreadyRunning(interval.id));
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ctrl_c.cancel(),
            Err(e) => msg_error!(Message::CtrlCListenFailed(e.to_string())),
        }
    });

    interval.start(&interval_config, &cancel, progress_callbacks()).await?;

    let finished = interval_config.repository().by_id(interval.id)?;
    match finished.state {
        IntervalState::Paused => {
            msg_info!(Message::IntervalPaused(finished.category.to_string(), format_duration(&finished.actual_duration)))
        }
        IntervalState::Cancelled => msg_info!(Message::IntervalCancelled(finished.category.to_string())),
        _ => {}
    }

    Ok(())
}

fn progress_callbacks() -> Callbacks {
    Callbacks::new()
        .on_start(|i: &Interval| {
            if i.actual_duration.is_zero() {
                msg_print!(Message::IntervalStarted(i.category.to_string(), format_duration(&i.planned_duration)));
            } else {
                msg_print!(Message::IntervalResumed(
                    i.category.to_string(),
                    format_duration(&i.actual_duration),
                    format_duration(&i.planned_duration)
                ));
            }
        })
        .on_tick(|i: &Interval| {
            msg_print!(Message::IntervalTick(
                i.category.to_string(),
                format_duration(&i.actual_duration),
                format_duration(&i.planned_duration)
            ));
        })
        .on_complete(|i: &Interval| {
            msg_success!(Message::IntervalCompleted(i.category.to_string()));
        })
}
