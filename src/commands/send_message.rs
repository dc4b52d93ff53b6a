//! Send one text message to the configured chat

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::telegram::{TelegramClient, API_BASE_URL};

/// Arguments of a single `telegram-send` invocation.
#[derive(Debug, Clone)]
pub struct SendArgs {
    /// Message text; `None` when no positional argument was given
    pub message: Option<String>,
    /// Config file, defaults to `telegram-send.ini` beside the executable
    pub config_path: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub api_url: String,
}

impl Default for SendArgs {
    fn default() -> Self {
        Self {
            message: None,
            config_path: None,
            timeout: None,
            api_url: API_BASE_URL.to_string(),
        }
    }
}

/// Read the config and deliver the message.
///
/// A missing message fails before the config file is touched.
pub async fn run(args: SendArgs) -> Result<()> {
    let text = args.message.ok_or(Error::MessageMissing)?;

    let config = load_config(args.config_path).context("Failed to read config")?;
    debug!(?config, "Config loaded");

    let mut client = TelegramClient::with_base_url(&config, args.api_url)?;
    if let Some(timeout) = args.timeout {
        client = client.with_timeout(timeout)?;
    }

    client
        .send_message(&text)
        .await
        .context("Telegram API request failed")?;

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> crate::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
}
