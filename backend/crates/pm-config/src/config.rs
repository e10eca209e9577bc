use crate::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, ClientConfig, ConfigError, ConfigErrorResult,
    DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig,
};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load from the config directory, see [`Config::config_dir`].
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Create `dir` when missing, read its config.toml when present (defaults
    /// otherwise), then apply the `PM_*` overrides.
    pub fn load_from(dir: &Path) -> ConfigErrorResult<Self> {
        fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let file = dir.join(CONFIG_FILE_NAME);
        let mut config: Config = match fs::read_to_string(&file) {
            Ok(contents) => toml::from_str(&contents)
                .map_err(|source| ConfigError::Toml {
                    path: file.clone(),
                    source,
                })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(source) => return Err(ConfigError::Io { path: file, source }),
        };

        config.server.apply_env();
        config.database.apply_env();
        config.logging.apply_env();
        config.security.apply_env();
        config.client.apply_env();

        Ok(config)
    }

    /// `PM_CONFIG_DIR` when set, else `.pm/` under the working directory.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("PM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map(|cwd| cwd.join(CONFIG_DIR_NAME))
            .map_err(|e| ConfigError::config_dir(e.to_string()))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.security.validate()?;
        self.client.validate()
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.database.resolve(&Self::config_dir()?))
    }

    /// `None` when file logging is off.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.logging.file_path(&Self::config_dir()?))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Startup summary. The CSRF token itself is never printed.
    pub fn log_summary(&self) {
        let csrf = match (self.security.csrf_enabled, &self.security.csrf_token) {
            (false, _) => "disabled",
            (true, Some(_)) => "enabled, fixed token",
            (true, None) => "enabled, generated token",
        };

        info!(
            "Listening on {} (max {} in flight), database '{}'",
            self.bind_addr(),
            self.server.max_connections,
            self.database.path
        );
        info!(
            "Log level {}, colored {}, file {}",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
        info!("CSRF check {}", csrf);
        info!(
            "Client defaults: {} (timeout {}s, reorder {:?})",
            self.client.server_url, self.client.request_timeout_secs, self.client.reorder_mode
        );
    }
}
