//! # Pomo - pomodoro interval timer
//!
//! Tracks work and break intervals, persists their state through a pluggable
//! repository and advances the running interval once per second.
//!
//! ## Features
//!
//! - **Interval engine**: start, pause, resume and cancel with progress callbacks
//! - **Break schedule**: short break after each pomodoro, long break after every third short break
//! - **Storage**: in-memory reference store or SQLite with migrations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
