//! Command implementations
//!
//! `telegram-send` has a single command; it lives here so the binary stays a
//! thin argument-parsing shell.

pub mod send_message;

pub use send_message::{run as send_message_run, SendArgs};
