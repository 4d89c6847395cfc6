//! Interval engine: creation and the real-time ticking state machine.
//!
//! The engine holds no interval state of its own. Every transition and every
//! tick goes through the configured [`Repository`], which is what lets a
//! [`Interval::pause`] issued from another task stop a running
//! [`Interval::start`] loop.
//!
//! ## Transitions on start
//!
//! | stored state | result                                            |
//! |--------------|---------------------------------------------------|
//! | Running      | no-op, returns immediately                        |
//! | NotStarted   | `start_time = now`, Running, ticking begins       |
//! | Paused       | Running, ticking resumes from `actual_duration`   |
//! | Done         | [`IntervalError::IntervalsCompleted`]             |
//! | Cancelled    | [`IntervalError::IntervalsCompleted`]             |
//!
//! ## Ticking loop
//!
//! The loop waits on three sources at once and proceeds with whichever fires
//! first:
//!
//! - a 1-second ticker: re-read, exit quietly if Paused, otherwise add one
//!   second to `actual_duration`, persist and report `on_tick`
//! - a one-shot deadline at `planned - actual`: mark Done, report
//!   `on_complete`, persist and return
//! - the caller's cancellation token: mark Cancelled, persist and return
//!
//! Any repository error aborts the loop and is returned as-is.

use crate::libs::category::next_category;
use crate::libs::error::{IntervalError, Result};
use crate::libs::interval::{Category, Interval, IntervalState};
use crate::libs::repository::Repository;
use crate::msg_debug;
use chrono::{Local, TimeDelta};
use std::fmt;
use std::sync::Arc;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Fixed cadence of the ticking loop.
const TICK: Duration = Duration::from_secs(1);

fn default_pomodoro_duration() -> TimeDelta {
    TimeDelta::minutes(25)
}
fn default_short_break_duration() -> TimeDelta {
    TimeDelta::minutes(5)
}
fn default_long_break_duration() -> TimeDelta {
    TimeDelta::minutes(15)
}

fn positive_or(value: TimeDelta, default: fn() -> TimeDelta) -> TimeDelta {
    if value > TimeDelta::zero() {
        value
    } else {
        default()
    }
}

/// Repository handle plus the planned duration of each category.
#[derive(Clone)]
pub struct IntervalConfig {
    repo: Arc<dyn Repository>,
    pub pomodoro_duration: TimeDelta,
    pub short_break_duration: TimeDelta,
    pub long_break_duration: TimeDelta,
}

impl IntervalConfig {
    /// Creates a config; zero or negative durations fall back to 25/5/15 minutes.
    pub fn new(repo: Arc<dyn Repository>, pomodoro: TimeDelta, short_break: TimeDelta, long_break: TimeDelta) -> Self {
        IntervalConfig {
            repo,
            pomodoro_duration: positive_or(pomodoro, default_pomodoro_duration),
            short_break_duration: positive_or(short_break, default_short_break_duration),
            long_break_duration: positive_or(long_break, default_long_break_duration),
        }
    }

    /// Config with every duration at its default.
    pub fn with_defaults(repo: Arc<dyn Repository>) -> Self {
        Self::new(repo, TimeDelta::zero(), TimeDelta::zero(), TimeDelta::zero())
    }

    pub fn repository(&self) -> &dyn Repository {
        self.repo.as_ref()
    }

    pub fn duration_for(&self, category: Category) -> TimeDelta {
        match category {
            Category::Pomodoro => self.pomodoro_duration,
            Category::ShortBreak => self.short_break_duration,
            Category::LongBreak => self.long_break_duration,
        }
    }
}

impl fmt::Debug for IntervalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalConfig")
            .field("pomodoro_duration", &self.pomodoro_duration)
            .field("short_break_duration", &self.short_break_duration)
            .field("long_break_duration", &self.long_break_duration)
            .finish_non_exhaustive()
    }
}

/// Receives an interval snapshot. Must not block for long: a slow callback
/// stalls ticking.
pub type Callback = Box<dyn FnMut(&Interval) + Send>;

/// The three progress hooks of [`Interval::start`]. Unset hooks do nothing.
pub struct Callbacks {
    on_start: Callback,
    on_tick: Callback,
    on_complete: Callback,
}

impl Default for Callbacks {
    fn default() -> Self {
        Callbacks {
            on_start: Box::new(|_| {}),
            on_tick: Box::new(|_| {}),
            on_complete: Box::new(|_| {}),
        }
    }
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once, before the first tick.
    pub fn on_start(mut self, f: impl FnMut(&Interval) + Send + 'static) -> Self {
        self.on_start = Box::new(f);
        self
    }

    /// Called after every persisted tick.
    pub fn on_tick(mut self, f: impl FnMut(&Interval) + Send + 'static) -> Self {
        self.on_tick = Box::new(f);
        self
    }

    /// Called once when the planned duration has elapsed.
    pub fn on_complete(mut self, f: impl FnMut(&Interval) + Send + 'static) -> Self {
        self.on_complete = Box::new(f);
        self
    }
}

/// Returns the unfinished last interval, or creates the next one.
///
/// An interval that is NotStarted, Running or Paused is handed back as-is so
/// an interrupted session resumes. Otherwise a new NotStarted interval is
/// created with the category chosen by [`next_category`] and the matching
/// planned duration.
pub fn get_or_create(config: &IntervalConfig) -> Result<Interval> {
    match config.repository().last() {
        Ok(interval) if !interval.state.is_terminal() => return Ok(interval),
        Ok(_) | Err(IntervalError::NoIntervals) => {}
        Err(e) => return Err(e),
    }

    new_interval(config)
}

fn new_interval(config: &IntervalConfig) -> Result<Interval> {
    let repo = config.repository();
    let category = next_category(repo)?;

    let mut interval = Interval::new(category, config.duration_for(category));
    interval.id = repo.create(&interval)?;

    msg_debug!(format!("created interval {} ({}, {}s planned)", interval.id, category, interval.planned_duration.num_seconds()));
    Ok(interval)
}

impl Interval {
    /// Runs the interval until it completes, is paused or is cancelled.
    ///
    /// The stored record decides the transition, not this snapshot. The
    /// future resolves when the ticking loop ends; run it in a spawned task
    /// to keep the caller free.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::IntervalsCompleted`] for a done or cancelled interval
    /// - [`IntervalError::InvalidState`] when the stored state is corrupt
    /// - any repository error raised while ticking
    pub async fn start(&self, config: &IntervalConfig, cancel: &CancellationToken, callbacks: Callbacks) -> Result<()> {
        let repo = config.repository();
        let mut interval = repo.by_id(self.id)?;

        match interval.state {
            IntervalState::Running => return Ok(()),
            IntervalState::NotStarted => {
                interval.start_time = Some(Local::now());
                msg_debug!(format!("starting interval {}", interval.id));
            }
            IntervalState::Paused => {
                msg_debug!(format!("resuming interval {} at {}s", interval.id, interval.actual_duration.num_seconds()));
            }
            IntervalState::Done | IntervalState::Cancelled => return Err(IntervalError::IntervalsCompleted),
        }

        interval.state = IntervalState::Running;
        repo.update(&interval)?;

        run_ticks(interval.id, config, cancel, callbacks).await
    }

    /// Marks the stored interval as Paused.
    ///
    /// Does not touch a running loop directly; the loop sees the new state on
    /// its next tick and exits.
    pub fn pause(&self, config: &IntervalConfig) -> Result<()> {
        let repo = config.repository();
        let mut interval = repo.by_id(self.id)?;

        if interval.state != IntervalState::Running {
            return Err(IntervalError::IntervalNotRunning);
        }

        interval.state = IntervalState::Paused;
        repo.update(&interval)?;

        msg_debug!(format!("paused interval {} at {}s", interval.id, interval.actual_duration.num_seconds()));
        Ok(())
    }
}

async fn run_ticks(id: i64, config: &IntervalConfig, cancel: &CancellationToken, mut callbacks: Callbacks) -> Result<()> {
    let repo = config.repository();
    let interval = repo.by_id(id)?;

    // The ticker is armed before the deadline so a tick due at the same
    // instant as the deadline is still delivered.
    let mut ticker = time::interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let expire = time::sleep(interval.remaining().to_std().unwrap_or_default());
    tokio::pin!(expire);

    (callbacks.on_start)(&interval);

    loop {
        tokio::select! {
            biased;

            _ = ticker.tick() => {
                let mut interval = repo.by_id(id)?;
                if interval.state == IntervalState::Paused {
                    msg_debug!(format!("interval {} paused, leaving tick loop", id));
                    return Ok(());
                }

                interval.actual_duration += TimeDelta::seconds(1);
                repo.update(&interval)?;
                msg_debug!(format!("interval {} tick {}s", id, interval.actual_duration.num_seconds()));
                (callbacks.on_tick)(&interval);
            }

            _ = &mut expire => {
                let mut interval = repo.by_id(id)?;
                interval.state = IntervalState::Done;
                (callbacks.on_complete)(&interval);

                msg_debug!(format!("interval {} done", id));
                return repo.update(&interval);
            }

            _ = cancel.cancelled() => {
                let mut interval = repo.by_id(id)?;
                interval.state = IntervalState::Cancelled;

                msg_debug!(format!("interval {} cancelled", id));
                return repo.update(&interval);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::memory::InMemoryRepo;

    #[test]
    fn non_positive_durations_fall_back_to_defaults() {
        let config = IntervalConfig::new(Arc::new(InMemoryRepo::new()), TimeDelta::zero(), TimeDelta::seconds(-5), TimeDelta::minutes(20));
        assert_eq!(config.pomodoro_duration, TimeDelta::minutes(25));
        assert_eq!(config.short_break_duration, TimeDelta::minutes(5));
        assert_eq!(config.long_break_duration, TimeDelta::minutes(20));
    }

    #[test]
    fn duration_for_matches_category() {
        let config = IntervalConfig::new(Arc::new(InMemoryRepo::new()), TimeDelta::seconds(3), TimeDelta::seconds(2), TimeDelta::seconds(1));
        assert_eq!(config.duration_for(Category::Pomodoro), TimeDelta::seconds(3));
        assert_eq!(config.duration_for(Category::ShortBreak), TimeDelta::seconds(2));
        assert_eq!(config.duration_for(Category::LongBreak), TimeDelta::seconds(1));
    }
}
