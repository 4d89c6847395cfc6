//! Next-category selection from stored history.
//!
//! The schedule is "short break after every work interval, long break after
//! every third short break". It is derived entirely from what the repository
//! holds, so a restarted process resumes the schedule with no extra state.

use crate::libs::error::{IntervalError, Result};
use crate::libs::interval::Category;
use crate::libs::repository::Repository;

/// How many recent breaks decide between a short and a long break.
const BREAK_WINDOW: usize = 3;

/// Chooses the category of the next interval.
///
/// - empty history: `Pomodoro`
/// - last interval was a break: `Pomodoro`
/// - last was `Pomodoro` and fewer than three breaks exist: `ShortBreak`
/// - last three breaks contain a `LongBreak`: `ShortBreak`
/// - last three breaks are all short: `LongBreak`
///
/// Repository failures other than an empty history are returned unchanged.
pub fn next_category(repo: &dyn Repository) -> Result<Category> {
    let last = match repo.last() {
        Ok(last) => last,
        Err(IntervalError::NoIntervals) => return Ok(Category::Pomodoro),
        Err(e) => return Err(e),
    };

    if last.category.is_break() {
        return Ok(Category::Pomodoro);
    }

    let recent_breaks = repo.breaks(BREAK_WINDOW)?;
    if recent_breaks.len() < BREAK_WINDOW {
        return Ok(Category::ShortBreak);
    }

    if recent_breaks.iter().any(|i| i.category == Category::LongBreak) {
        return Ok(Category::ShortBreak);
    }

    Ok(Category::LongBreak)
}
