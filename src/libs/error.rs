//! Error taxonomy for the interval engine and its repositories.
//!
//! Every failure is a distinct variant so callers can branch on
//! [`IntervalError::NoIntervals`] (empty history, usually not fatal) while
//! treating the rest as hard stops.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntervalError {
    /// The repository holds no intervals yet.
    #[error("no intervals")]
    NoIntervals,

    /// Pause was requested for an interval that is not running.
    #[error("interval not running")]
    IntervalNotRunning,

    /// Start was requested for a done or cancelled interval.
    #[error("interval completed or cancelled: cannot start")]
    IntervalsCompleted,

    /// A stored state value outside the known lifecycle.
    #[error("invalid state: {0}")]
    InvalidState(i64),

    /// Id `0` (reserved) was passed to a repository operation.
    #[error("invalid ID: {0}")]
    InvalidId(i64),

    /// No interval was ever created with this id.
    #[error("interval {0} not found")]
    NotFound(i64),

    /// The durable store failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type alias for IntervalError
pub type Result<T, E = IntervalError> = std::result::Result<T, E>;
