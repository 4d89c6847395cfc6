//! Core library modules.
//!
//! The interval model, its repositories and the ticking engine, plus the
//! configuration, messaging and formatting support around them.

pub mod category;
pub mod config;
pub mod data_storage;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod interval;
pub mod memory;
pub mod messages;
pub mod repository;
pub mod view;
