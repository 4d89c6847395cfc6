//! Interval entity and its category/state vocabulary.
//!
//! An [`Interval`] is a single planned unit of focused work or break. Ids are
//! assigned by the repository on creation and never chosen by callers; every
//! later change is a full-record overwrite through the repository.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted -> Running <-> Paused
//!                  |           |
//!                  v           v
//!            Done | Cancelled (terminal)
//! ```

use crate::libs::error::IntervalError;
use chrono::{DateTime, Local, TimeDelta};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The kind of interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Category {
    /// Returns `true` for `ShortBreak` and `LongBreak`.
    pub fn is_break(&self) -> bool {
        matches!(self, Category::ShortBreak | Category::LongBreak)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pomodoro => "Pomodoro",
            Category::ShortBreak => "ShortBreak",
            Category::LongBreak => "LongBreak",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pomodoro" => Ok(Category::Pomodoro),
            "ShortBreak" => Ok(Category::ShortBreak),
            "LongBreak" => Ok(Category::LongBreak),
            other => Err(format!("unknown interval category: {}", other)),
        }
    }
}

/// Lifecycle state of an interval.
///
/// The ordinal values are what durable stores persist; their order follows a
/// rough lifecycle, not a strict sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntervalState {
    #[default]
    NotStarted = 0,
    Running = 1,
    Paused = 2,
    Done = 3,
    Cancelled = 4,
}

impl IntervalState {
    /// `Done` and `Cancelled` can never be left.
    pub fn is_terminal(&self) -> bool {
        matches!(self, IntervalState::Done | IntervalState::Cancelled)
    }

    pub fn ordinal(&self) -> i64 {
        *self as i64
    }
}

impl TryFrom<i64> for IntervalState {
    type Error = IntervalError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(IntervalState::NotStarted),
            1 => Ok(IntervalState::Running),
            2 => Ok(IntervalState::Paused),
            3 => Ok(IntervalState::Done),
            4 => Ok(IntervalState::Cancelled),
            other => Err(IntervalError::InvalidState(other)),
        }
    }
}

impl Display for IntervalState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntervalState::NotStarted => "Not started",
            IntervalState::Running => "Running",
            IntervalState::Paused => "Paused",
            IntervalState::Done => "Done",
            IntervalState::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// A single timed work or break period.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    /// Repository-assigned id; `0` means "not yet persisted".
    pub id: i64,
    /// Set the first time the interval starts running.
    pub start_time: Option<DateTime<Local>>,
    pub planned_duration: TimeDelta,
    /// Grows by one tick per elapsed second while running.
    pub actual_duration: TimeDelta,
    pub category: Category,
    pub state: IntervalState,
}

impl Interval {
    /// Builds an unsaved interval in the `NotStarted` state.
    pub fn new(category: Category, planned_duration: TimeDelta) -> Self {
        Interval {
            id: 0,
            start_time: None,
            planned_duration,
            actual_duration: TimeDelta::zero(),
            category,
            state: IntervalState::NotStarted,
        }
    }

    /// Time still to run before the interval completes, never negative.
    pub fn remaining(&self) -> TimeDelta {
        (self.planned_duration - self.actual_duration).max(TimeDelta::zero())
    }
}
