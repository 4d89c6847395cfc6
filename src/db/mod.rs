//! SQLite persistence.
//!
//! - [`db`]: connection setup for the application database
//! - [`migrations`]: versioned schema changes
//! - [`intervals`]: the durable interval repository
//!
//! ```rust,no_run
//! use pomo::db::intervals::Intervals;
//! use pomo::libs::repository::Repository;
//!
//! let intervals = Intervals::new()?;
//! let last = intervals.last();
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod intervals;
pub mod migrations;
