//! Configuration for the Bot API chat and token
//!
//! Loads `telegram-send.ini` from the directory of the running executable.
//! The format is one `key=value` pair per line with `#` comments.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// Name of the config file looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "telegram-send.ini";

/// Path of the config file beside the running executable.
pub fn default_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::ExecutablePath)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Chat and token used to address and authenticate the outgoing message.
///
/// Keys absent from the file are left empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub chat: String,
    pub token: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("chat", &self.chat)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

impl Config {
    /// Load the config file that sits next to the executable
    pub fn load() -> Result<Self> {
        Self::load_from_file(default_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading config");

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse `key=value` lines.
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. Only
    /// `chat` and `token` are accepted; a repeated key keeps its last value.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Config::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let value = value.trim().to_string();
            match key.trim() {
                "chat" => config.chat = value,
                "token" => config.token = value,
                other => return Err(Error::UnknownParameter(other.to_string())),
            }
        }

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn parse_reads_chat_and_token() {
        let config = Config::parse("chat=123\ntoken=abc\n# comment\n\n").unwrap();
        assert_eq!(config.chat, "123");
        assert_eq!(config.token, "abc");
    }

    #[test]
    fn parse_trims_keys_values_and_crlf() {
        let config = Config::parse("  chat = -100500 \r\n\ttoken=  12:AB-cd \r\n").unwrap();
        assert_eq!(config.chat, "-100500");
        assert_eq!(config.token, "12:AB-cd");
    }

    #[test]
    fn parse_skips_indented_comments() {
        let config = Config::parse("   # token=ignored\nchat=1").unwrap();
        assert_eq!(config.chat, "1");
        assert!(config.token.is_empty());
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = Config::parse("chat=1\nfoo=bar\n").unwrap_err();
        assert!(matches!(err, Error::UnknownParameter(ref key) if key == "foo"));
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn parse_ignores_lines_without_separator() {
        let config = Config::parse("chat=7\nthis line has no separator\ntoken=t").unwrap();
        assert_eq!(config.chat, "7");
        assert_eq!(config.token, "t");
    }

    #[test]
    fn parse_splits_on_first_separator_only() {
        let config = Config::parse("token=abc=def==").unwrap();
        assert_eq!(config.token, "abc=def==");
    }

    #[test]
    fn parse_last_occurrence_wins() {
        let config = Config::parse("chat=1\nchat=2\ntoken=a\ntoken=b").unwrap();
        assert_eq!(config.chat, "2");
        assert_eq!(config.token, "b");
    }

    #[test]
    fn parse_missing_keys_yield_empty_strings() {
        let config = Config::parse("# only a comment\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_empty_key_is_unknown() {
        let err = Config::parse("=value").unwrap_err();
        assert!(matches!(err, Error::UnknownParameter(ref key) if key.is_empty()));
    }

    #[test]
    fn from_str_matches_parse() {
        let config: Config = "chat=42\ntoken=xyz".parse().unwrap();
        assert_eq!(config.chat, "42");
        assert_eq!(config.token, "xyz");
    }

    #[test]
    fn debug_redacts_token() {
        let config = Config {
            chat: "42".to_string(),
            token: "secret-token".to_string(),
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("42"));
        assert!(!debug_str.contains("secret-token"));
    }

    #[test]
    fn load_from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# telegram-send").unwrap();
        writeln!(file, "chat=123").unwrap();
        writeln!(file, "token=abc").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.chat, "123");
        assert_eq!(config.token, "abc");
    }

    #[test]
    fn load_from_file_missing_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let err = Config::load_from_file(&path).unwrap_err();
        match err {
            Error::ConfigRead { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_from_file_propagates_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "proxy=socks5://localhost").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("unknown parameter: proxy"));
    }

    #[test]
    fn load_reads_from_default_path() {
        let expected = default_path().unwrap();
        match Config::load() {
            Err(Error::ConfigRead { path, .. }) => assert_eq!(path, expected),
            Ok(_) => assert!(expected.exists()),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn default_path_is_beside_executable() {
        let path = default_path().unwrap();
        let exe = std::env::current_exe().unwrap();

        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
        assert_eq!(path.parent(), exe.parent());
    }
}
