//! Settings shared by `pm-server` and the `pm` client.
//!
//! Values come from `config.toml` in the config directory (`PM_CONFIG_DIR`,
//! else `./.pm/`) and are then overridden by `PM_*` environment variables.

mod client_config;
mod config;
mod database_config;
mod env;
mod error;
mod log_level;
mod logging_config;
mod security_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use client_config::{ClientConfig, ReorderMode};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use security_config::SecurityConfig;
pub use server_config::ServerConfig;

const CONFIG_FILE_NAME: &str = "config.toml";
const CONFIG_DIR_NAME: &str = ".pm";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 256;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 10_000;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_CSRF_ENABLED: bool = true;
const MIN_CSRF_TOKEN_LENGTH: usize = 16;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
