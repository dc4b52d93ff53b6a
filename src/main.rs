//! telegram-send CLI - main entry point
//!
//! Sends its first argument as a message to the chat configured in
//! `telegram-send.ini` next to the executable.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use telegram_send::commands::{self, SendArgs};
use telegram_send::telegram::API_BASE_URL;
use telegram_send::VERSION;

#[derive(Parser, Debug)]
#[command(name = "telegram-send")]
#[command(about = "Tiny CLI tool for sending messages to Telegram", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Message text to send (use `--` before text starting with `-`)
    message: Option<String>,

    /// Anything after the message is ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Config file (default: telegram-send.ini beside the executable)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Give up on the API request after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Bot API server, e.g. a self-hosted one
    #[arg(long, value_name = "URL", default_value = API_BASE_URL)]
    api_url: String,
}

impl Cli {
    fn into_send_args(self) -> SendArgs {
        SendArgs {
            message: self.message,
            config_path: self.config,
            timeout: self.timeout.map(Duration::from_secs),
            api_url: self.api_url,
        }
    }
}

/// Accept the single-dash `-version` spelling as an alias of `--version`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(|arg| {
            if positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                arg
            } else if arg == "-version" {
                OsString::from("--version")
            } else {
                arg
            }
        })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout only carries the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("telegram_send=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            // --version and --help also arrive here
            print!("{err}");
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if !cli.extra.is_empty() {
        tracing::debug!(count = cli.extra.len(), "Ignoring extra arguments");
    }

    match commands::send_message_run(cli.into_send_args()).await {
        Ok(()) => {
            println!("Success");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
