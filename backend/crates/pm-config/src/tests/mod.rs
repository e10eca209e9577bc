mod loading;

use crate::Config;

use std::env;
use std::path::Path;

use tempfile::TempDir;

/// Environment variables changed for one test, restored in reverse order on drop.
#[derive(Default)]
pub(crate) struct ScopedEnv {
    saved: Vec<(&'static str, Option<String>)>,
}

impl ScopedEnv {
    pub(crate) fn set(mut self, key: &'static str, value: &str) -> Self {
        self.saved.push((key, env::var(key).ok()));
        // SAFETY: config tests run under #[serial]
        unsafe { env::set_var(key, value) };
        self
    }

    pub(crate) fn unset(mut self, key: &'static str) -> Self {
        self.saved.push((key, env::var(key).ok()));
        // SAFETY: config tests run under #[serial]
        unsafe { env::remove_var(key) };
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            // SAFETY: config tests run under #[serial]
            unsafe {
                match original {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

/// Throwaway config directory, exposed through `PM_CONFIG_DIR`.
pub(crate) struct TestConfigDir {
    dir: TempDir,
    _env: ScopedEnv,
}

impl TestConfigDir {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let scope = ScopedEnv::default().set("PM_CONFIG_DIR", dir.path().to_str().unwrap());
        Self { dir, _env: scope }
    }

    pub(crate) fn with_file(contents: &str) -> Self {
        let config_dir = Self::new();
        std::fs::write(config_dir.path().join("config.toml"), contents).unwrap();
        config_dir
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn load(&self) -> Config {
        Config::load().unwrap()
    }
}
