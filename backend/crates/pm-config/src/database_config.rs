use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, env};

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// SQLite file holding projects, sprints, stories and tasks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_owned(),
        }
    }
}

impl DatabaseConfig {
    /// The file must stay inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid("database.path", "must not be empty"));
        }

        let path = Path::new(&self.path);
        let escapes = path.is_absolute()
            || path
                .components()
                .any(|component| matches!(component, Component::ParentDir));
        if escapes {
            return Err(ConfigError::invalid(
                "database.path",
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn resolve(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.path)
    }

    pub(crate) fn apply_env(&mut self) {
        env::override_string("PM_DATABASE_PATH", &mut self.path);
    }
}
