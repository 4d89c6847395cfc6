//! In-memory reference repository.
//!
//! Intervals live in an append-only vector addressed by `id - 1`, so ids are
//! dense and 1-based. One reader/writer lock guards the whole store; interval
//! volume is low and records are small.
//!
//! This is the default persistence when no durable store is configured and the
//! store the engine tests run against.

use crate::libs::error::{IntervalError, Result};
use crate::libs::interval::Interval;
use crate::libs::repository::Repository;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryRepo {
    intervals: RwLock<Vec<Interval>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intervals created so far.
    pub fn len(&self) -> usize {
        self.intervals.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(id: i64, len: usize) -> Result<usize> {
        if id == 0 {
            return Err(IntervalError::InvalidId(id));
        }
        match usize::try_from(id - 1) {
            Ok(index) if index < len => Ok(index),
            _ => Err(IntervalError::NotFound(id)),
        }
    }
}

impl Repository for InMemoryRepo {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let mut intervals = self.intervals.write();

        let mut interval = interval.clone();
        interval.id = intervals.len() as i64 + 1;
        let id = interval.id;
        intervals.push(interval);

        Ok(id)
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        let mut intervals = self.intervals.write();

        let index = Self::index(interval.id, intervals.len())?;
        intervals[index] = interval.clone();
        Ok(())
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        let intervals = self.intervals.read();

        let index = Self::index(id, intervals.len())?;
        Ok(intervals[index].clone())
    }

    fn last(&self) -> Result<Interval> {
        self.intervals.read().last().cloned().ok_or(IntervalError::NoIntervals)
    }

    fn breaks(&self, n: usize) -> Result<Vec<Interval>> {
        let intervals = self.intervals.read();

        // Walk tail to head, skipping work intervals
        Ok(intervals.iter().rev().filter(|i| i.category.is_break()).take(n).cloned().collect())
    }
}
