//! Minimal Telegram Bot API client (`sendMessage` only).

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::{Error, Result, VERSION};

pub const API_BASE_URL: &str = "https://api.telegram.org";

/// Form body of a `sendMessage` call.
#[derive(Debug, Serialize)]
struct SendMessageForm<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    chat: String,
    token: String,
    base_url: String,
}

impl TelegramClient {
    /// Create a client for the chat and token of `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Self::build(config, API_BASE_URL, None)
    }

    /// Create a client with a custom base url (primarily for tests).
    pub fn with_base_url<S: Into<String>>(config: &Config, base_url: S) -> Result<Self> {
        Self::build(config, base_url, None)
    }

    /// Rebuild the HTTP client with a whole-request timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
        let config = Config {
            chat: self.chat,
            token: self.token,
        };
        Self::build(&config, self.base_url, Some(timeout))
    }

    fn build<S: Into<String>>(
        config: &Config,
        base_url: S,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!("telegram-send/{}", VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::HttpClient)?;

        Ok(Self {
            http,
            chat: config.chat.clone(),
            token: config.token.clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.token)
    }

    /// Send `text` to the configured chat.
    ///
    /// Any status above 299 is an [`Error::Api`] carrying the response body;
    /// a 2xx response body is not inspected.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        debug!(chat = %self.chat, len = text.len(), "Sending message");

        let form = SendMessageForm {
            chat_id: &self.chat,
            text,
        };

        // The url embeds the token, keep it out of error messages
        let response = self
            .http
            .post(self.endpoint())
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;

        let status = response.status().as_u16();
        if status > 299 {
            let body = response.text().await.unwrap_or_default();
            warn!(status, "Bot API rejected the message");
            return Err(Error::Api { status, body });
        }

        info!(chat = %self.chat, status, "Message delivered");
        Ok(())
    }
}
