//! Environment-driven configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Chat client session string (carries the account credentials).
    pub session_string: String,
    /// Without a key `.ask` answers "not configured".
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub state_path: PathBuf,
    /// Chat handle of the bot that renders quotes.
    pub quote_bot: String,
    /// How long to wait for the quote bot's reply.
    pub quote_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let session_string = get("SESSION_STRING").ok_or(ConfigError::Missing("SESSION_STRING"))?;

        Ok(Self {
            session_string,
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            state_path: get("STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("state.json")),
            quote_bot: get("QUOTE_BOT").unwrap_or_else(|| "@QuotLyBot".to_string()),
            quote_timeout: Duration::from_secs(parse_or(
                get("QUOTE_TIMEOUT_SECS"),
                "QUOTE_TIMEOUT_SECS",
                15,
            )?),
        })
    }

    pub fn ask_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
