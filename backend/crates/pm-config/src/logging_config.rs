use crate::{DEFAULT_LOG_DIRECTORY, LogLevel, env};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// ANSI colors on stdout
    pub colored: bool,
    /// File name inside `dir`; stdout only when unset
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: DEFAULT_LOG_DIRECTORY.to_owned(),
        }
    }
}

impl LoggingConfig {
    pub fn file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|file| config_dir.join(&self.dir).join(file))
    }

    pub(crate) fn apply_env(&mut self) {
        env::override_parsed("PM_LOG_LEVEL", &mut self.level);
        env::override_flag("PM_LOG_COLORED", &mut self.colored);
        env::override_optional("PM_LOG_FILE", &mut self.file);
        env::override_string("PM_LOG_DIR", &mut self.dir);
    }
}
