use crate::error::ensure_within;
use crate::{
    ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT, MAX_MAX_CONNECTIONS,
    MIN_MAX_CONNECTIONS, MIN_PORT, env,
};

use serde::Deserialize;

/// Where `pm-server` listens and how much it serves at once.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
    /// In-flight requests before new ones queue
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.port != 0 {
            ensure_within("server.port", self.port, MIN_PORT..=u16::MAX)?;
        }

        ensure_within(
            "server.max_connections",
            self.max_connections,
            MIN_MAX_CONNECTIONS..=MAX_MAX_CONNECTIONS,
        )
    }

    pub(crate) fn apply_env(&mut self) {
        env::override_string("PM_SERVER_HOST", &mut self.host);
        env::override_parsed("PM_SERVER_PORT", &mut self.port);
        env::override_parsed("PM_SERVER_MAX_CONNECTIONS", &mut self.max_connections);
    }
}
