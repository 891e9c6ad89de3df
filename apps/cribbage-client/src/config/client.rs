use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::CountingRule;
use crate::error::ClientError;
use crate::sync::RetryPolicy;

pub const DEFAULT_AUTHORITY_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Where and how to reach the authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AUTHORITY_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            retry: RetryPolicy::default(),
        }
    }
}

/// Log output format for the binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ClientError::config(format!(
                "unknown log format '{other}' (expected pretty or json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub authority: AuthorityConfig,
    pub counting: CountingRule,
    /// Display name shown on the table; never persisted.
    pub player_name: String,
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            authority: AuthorityConfig::default(),
            counting: CountingRule::default(),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Reads `CRIBBAGE_*` variables, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ClientError> {
        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            max_attempts: parsed_var("CRIBBAGE_RETRY_ATTEMPTS")?.unwrap_or(defaults.max_attempts),
            initial_backoff: millis_var("CRIBBAGE_RETRY_BASE_MS")?
                .unwrap_or(defaults.initial_backoff),
            max_backoff: millis_var("CRIBBAGE_RETRY_MAX_MS")?.unwrap_or(defaults.max_backoff),
        };
        if retry.initial_backoff > retry.max_backoff {
            return Err(ClientError::config(format!(
                "CRIBBAGE_RETRY_BASE_MS ({:?}) exceeds CRIBBAGE_RETRY_MAX_MS ({:?})",
                retry.initial_backoff, retry.max_backoff
            )));
        }

        let authority = AuthorityConfig {
            base_url: optional_var("CRIBBAGE_AUTHORITY_URL")?
                .unwrap_or_else(|| DEFAULT_AUTHORITY_URL.to_string()),
            request_timeout: millis_var("CRIBBAGE_REQUEST_TIMEOUT_MS")?
                .unwrap_or(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)),
            retry,
        };

        let counting = match optional_var("CRIBBAGE_COUNTING")? {
            Some(raw) => raw.parse::<CountingRule>().map_err(|e| {
                ClientError::config(format!("CRIBBAGE_COUNTING: {e}"))
            })?,
            None => CountingRule::default(),
        };

        Ok(Self {
            authority,
            counting,
            player_name: optional_var("CRIBBAGE_PLAYER_NAME")?
                .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
            log_format: parsed_var("CRIBBAGE_LOG_FORMAT")?.unwrap_or_default(),
        })
    }
}

/// Unset and blank both count as absent; a non-UTF-8 value is an error.
fn optional_var(name: &str) -> Result<Option<String>, ClientError> {
    match env::var(name) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e @ env::VarError::NotUnicode(_)) => {
            Err(ClientError::config(format!("'{name}': {e}")))
        }
    }
}

fn parsed_var<T>(name: &str) -> Result<Option<T>, ClientError>
where
    T: FromStr,
    T::Err: Display,
{
    optional_var(name)?
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                ClientError::config(format!("Invalid value '{raw}' for '{name}': {e}"))
            })
        })
        .transpose()
}

fn millis_var(name: &str) -> Result<Option<Duration>, ClientError> {
    Ok(parsed_var::<u64>(name)?.map(Duration::from_millis))
}
