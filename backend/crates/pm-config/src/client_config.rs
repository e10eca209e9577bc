use crate::error::ensure_within;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_URL,
    MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS, env,
};

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// How a reordered backlog is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderMode {
    /// One request per story, sent concurrently
    #[default]
    PerRow,
    /// One request for the whole list, applied in a transaction
    Batch,
}

impl FromStr for ReorderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per_row" => Ok(Self::PerRow),
            "batch" => Ok(Self::Batch),
            other => Err(ConfigError::invalid(
                "client.reorder_mode",
                format!("expected 'per_row' or 'batch', got '{}'", other),
            )),
        }
    }
}

/// Settings of the `pm` client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub reorder_mode: ReorderMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            reorder_mode: ReorderMode::default(),
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let has_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| self.server_url.starts_with(scheme));
        if !has_scheme {
            return Err(ConfigError::invalid(
                "client.server_url",
                format!("must start with http:// or https://, got '{}'", self.server_url),
            ));
        }

        ensure_within(
            "client.request_timeout_secs",
            self.request_timeout_secs,
            MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS,
        )
    }

    pub(crate) fn apply_env(&mut self) {
        env::override_string("PM_SERVER_URL", &mut self.server_url);
        env::override_parsed("PM_CLIENT_TIMEOUT_SECS", &mut self.request_timeout_secs);
        env::override_parsed("PM_REORDER_MODE", &mut self.reorder_mode);
    }
}
