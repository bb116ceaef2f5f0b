use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got '{value}'")]
    InvalidMillis { key: &'static str, value: String },
}

/// Runtime settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Simulated processing time of a purchase
    pub submit_delay: Duration,
    /// How long a toast stays on screen
    pub toast_duration_ms: u64,
    /// Alternative fixture file; the embedded fixtures are used when unset
    pub fixtures_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            fixtures_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let submit_delay = match get("STARMARKET_SUBMIT_DELAY_MS") {
            Some(value) => Duration::from_millis(parse_millis("STARMARKET_SUBMIT_DELAY_MS", &value)?),
            None => defaults.submit_delay,
        };

        let toast_duration_ms = match get("STARMARKET_TOAST_DURATION_MS") {
            Some(value) => parse_millis("STARMARKET_TOAST_DURATION_MS", &value)?,
            None => defaults.toast_duration_ms,
        };

        let fixtures_path = get("STARMARKET_FIXTURES").map(PathBuf::from);

        Ok(AppConfig {
            submit_delay,
            toast_duration_ms,
            fixtures_path,
        })
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidMillis {
        key,
        value: value.to_string(),
    })
}
