//! Error types for telegram-send

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to get executable path")]
    ExecutablePath(#[source] std::io::Error),

    #[error("read file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("message text is missing")]
    MessageMissing,

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("send request")]
    Transport(#[source] reqwest::Error),

    #[error("invalid response code: {status}{}", format_body(.body))]
    Api { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;

fn format_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(", body: {}", body)
    }
}
