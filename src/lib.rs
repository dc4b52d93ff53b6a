//! telegram-send library
//!
//! Reads a chat id and bot token from `telegram-send.ini` next to the
//! executable and sends one text message through the Telegram Bot API.

pub mod config;
pub mod error;
pub mod telegram;

// Re-export common types
pub use config::{Config, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use telegram::TelegramClient;

/// Build version, injected as `TELEGRAM_SEND_VERSION` at compile time
/// (release builds pass the git tag), otherwise the crate version.
pub const VERSION: &str = match option_env!("TELEGRAM_SEND_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

// Commands module uses re-exported types, so it must be declared after the re-exports
pub mod commands;
