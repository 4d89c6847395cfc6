//! Persistence contract for interval records.
//!
//! The repository is the single source of truth for interval data. The engine
//! never caches intervals between calls; it reads and writes through this
//! trait on every transition and every tick.
//!
//! ## Contract
//!
//! - `create` assigns a fresh positive id and never reuses one
//! - `update` overwrites the whole record stored under `interval.id`
//! - `by_id` and `update` reject id `0` with [`IntervalError::InvalidId`]
//! - `last` fails with [`IntervalError::NoIntervals`] on an empty store
//! - `breaks(n)` returns at most `n` break intervals, most recent first;
//!   fewer (even none) is not an error
//!
//! All methods must be safe to call from several threads. Reads may overlap
//! each other but never a write to the same store.
//!
//! Implementations: [`crate::libs::memory::InMemoryRepo`] and
//! [`crate::db::intervals::Intervals`].
//!
//! [`IntervalError::InvalidId`]: crate::libs::error::IntervalError::InvalidId
//! [`IntervalError::NoIntervals`]: crate::libs::error::IntervalError::NoIntervals

use crate::libs::error::Result;
use crate::libs::interval::Interval;

pub trait Repository: Send + Sync {
    /// Stores a new interval and returns its id. The `id` field of the
    /// argument is ignored.
    fn create(&self, interval: &Interval) -> Result<i64>;

    /// Overwrites the stored record with the same id.
    fn update(&self, interval: &Interval) -> Result<()>;

    /// Fetches a single interval.
    fn by_id(&self, id: i64) -> Result<Interval>;

    /// Fetches the most recently created interval.
    fn last(&self) -> Result<Interval>;

    /// Up to `n` most recent ShortBreak/LongBreak intervals, newest first.
    fn breaks(&self, n: usize) -> Result<Vec<Interval>>;
}
