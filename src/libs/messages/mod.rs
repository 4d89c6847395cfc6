//! User-facing messages and the macros that print them.
//!
//! Call sites never hold literal text: they pass a [`Message`] to one of the
//! `msg_*!` macros, which prints to the console or, in debug mode, routes the
//! line through `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
