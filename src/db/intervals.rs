//! SQLite-backed interval repository.
//!
//! The durable counterpart of [`InMemoryRepo`](crate::libs::memory::InMemoryRepo):
//! same contract, but the history survives restarts so the break schedule
//! picks up where it left off.
//!
//! ## Storage layout
//!
//! - durations are whole seconds
//! - `start_time` is a timestamp or NULL before the first start
//! - `category` is stored by name, `state` by ordinal
//!
//! A state ordinal outside the known lifecycle is reported as
//! [`IntervalError::InvalidState`] when the row is read.

use crate::db::db::Db;
use crate::libs::error::{IntervalError, Result};
use crate::libs::interval::{Category, Interval, IntervalState};
use crate::libs::repository::Repository;
use chrono::{DateTime, Local, TimeDelta};
use parking_lot::Mutex;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const INSERT_INTERVAL: &str = "INSERT INTO intervals (start_time, planned_duration, actual_duration, category, state) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_INTERVAL: &str =
    "UPDATE intervals SET start_time = ?1, planned_duration = ?2, actual_duration = ?3, category = ?4, state = ?5 WHERE id = ?6";
const SELECT_BY_ID: &str = "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals WHERE id = ?1";
const SELECT_LAST: &str = "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals ORDER BY id DESC LIMIT 1";
const SELECT_BREAKS: &str = "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals WHERE category IN ('ShortBreak', 'LongBreak') ORDER BY id DESC LIMIT ?1";

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

/// A row as stored, before the state ordinal is validated.
struct IntervalRow {
    id: i64,
    start_time: Option<DateTime<Local>>,
    planned_secs: i64,
    actual_secs: i64,
    category: Category,
    state: i64,
}

impl IntervalRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(IntervalRow {
            id: row.get(0)?,
            start_time: row.get(1)?,
            planned_secs: row.get(2)?,
            actual_secs: row.get(3)?,
            category: row.get(4)?,
            state: row.get(5)?,
        })
    }
}

impl TryFrom<IntervalRow> for Interval {
    type Error = IntervalError;

    fn try_from(row: IntervalRow) -> Result<Self> {
        Ok(Interval {
            id: row.id,
            start_time: row.start_time,
            planned_duration: TimeDelta::seconds(row.planned_secs),
            actual_duration: TimeDelta::seconds(row.actual_secs),
            category: row.category,
            state: IntervalState::try_from(row.state)?,
        })
    }
}

/// Interval repository over a shared SQLite connection.
///
/// The connection sits behind one mutex, so reads and writes never overlap.
pub struct Intervals {
    pub conn: Arc<Mutex<Connection>>,
}

impl Intervals {
    /// Opens the application database, applying migrations first.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    /// A throwaway database, mainly for tests.
    pub fn in_memory() -> anyhow::Result<Self> {
        Ok(Self::from_db(Db::open_in_memory()?))
    }

    pub fn from_db(db: Db) -> Self {
        Intervals {
            conn: Arc::new(Mutex::new(db.conn)),
        }
    }
}

impl Repository for Intervals {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let conn_guard = self.conn.lock();
        conn_guard.execute(
            INSERT_INTERVAL,
            params![
                interval.start_time,
                interval.planned_duration.num_seconds(),
                interval.actual_duration.num_seconds(),
                interval.category,
                interval.state.ordinal(),
            ],
        )?;

        Ok(conn_guard.last_insert_rowid())
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        if interval.id == 0 {
            return Err(IntervalError::InvalidId(interval.id));
        }

        let conn_guard = self.conn.lock();
        let affected_rows = conn_guard.execute(
            UPDATE_INTERVAL,
            params![
                interval.start_time,
                interval.planned_duration.num_seconds(),
                interval.actual_duration.num_seconds(),
                interval.category,
                interval.state.ordinal(),
                interval.id,
            ],
        )?;

        if affected_rows == 0 {
            return Err(IntervalError::NotFound(interval.id));
        }
        Ok(())
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        if id == 0 {
            return Err(IntervalError::InvalidId(id));
        }

        let conn_guard = self.conn.lock();
        let row = conn_guard.query_row(SELECT_BY_ID, params![id], IntervalRow::read).optional()?;

        Interval::try_from(row.ok_or(IntervalError::NotFound(id))?)
    }

    fn last(&self) -> Result<Interval> {
        let conn_guard = self.conn.lock();
        let row = conn_guard.query_row(SELECT_LAST, [], IntervalRow::read).optional()?;

        Interval::try_from(row.ok_or(IntervalError::NoIntervals)?)
    }

    fn breaks(&self, n: usize) -> Result<Vec<Interval>> {
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(SELECT_BREAKS)?;
        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], IntervalRow::read)?;

        let mut breaks: Vec<Interval> = Vec::new();
        for row in rows {
            breaks.push(Interval::try_from(row?)?);
        }

        Ok(breaks)
    }
}
