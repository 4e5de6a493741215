use std::path::PathBuf;

use donezo_core::error::CoreError;
use donezo_core::progress::{ProgressConfig, DEFAULT_REVENUE_TARGET};

/// Errors from loading [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development against a
/// backend on `localhost:5000`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (default: `http://localhost:5000`).
    pub api_url: String,
    /// Session storage file (default: `.donezo/session.json`).
    pub session_path: PathBuf,
    /// Revenue target for the progress gauge (default: `600000`).
    pub progress: ProgressConfig,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            session_path: PathBuf::from(".donezo/session.json"),
            progress: ProgressConfig::default(),
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                  |
    /// |-------------------------------|--------------------------|
    /// | `DONEZO_API_URL`              | `http://localhost:5000`  |
    /// | `DONEZO_SESSION_PATH`         | `.donezo/session.json`   |
    /// | `DONEZO_REVENUE_TARGET`       | `600000`                 |
    /// | `DONEZO_REQUEST_TIMEOUT_SECS` | `30`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("DONEZO_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_url);

        let session_path = lookup("DONEZO_SESSION_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_path);

        let progress = match lookup("DONEZO_REVENUE_TARGET") {
            Some(raw) => {
                let target: f64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "DONEZO_REVENUE_TARGET",
                    value: raw.clone(),
                    expected: "a positive number",
                })?;
                ProgressConfig::new(target)?
            }
            None => ProgressConfig::new(DEFAULT_REVENUE_TARGET)?,
        };

        let request_timeout_secs = match lookup("DONEZO_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "DONEZO_REQUEST_TIMEOUT_SECS",
                value: raw.clone(),
                expected: "a whole number of seconds",
            })?,
            None => defaults.request_timeout_secs,
        };

        Ok(Self {
            api_url,
            session_path,
            progress,
            request_timeout_secs,
        })
    }
}
