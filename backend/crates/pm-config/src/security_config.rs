use crate::{ConfigError, ConfigErrorResult, DEFAULT_CSRF_ENABLED, MIN_CSRF_TOKEN_LENGTH, env};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Reject state-changing requests without a matching `X-CSRF-Token`
    pub csrf_enabled: bool,
    /// Fixed token; a random one is generated at startup when unset
    pub csrf_token: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            csrf_enabled: DEFAULT_CSRF_ENABLED,
            csrf_token: None,
        }
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.csrf_token {
            Some(token) if token.len() < MIN_CSRF_TOKEN_LENGTH => Err(ConfigError::invalid(
                "security.csrf_token",
                format!("must be at least {} characters", MIN_CSRF_TOKEN_LENGTH),
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn apply_env(&mut self) {
        env::override_flag("PM_CSRF_ENABLED", &mut self.csrf_enabled);
        env::override_optional("PM_CSRF_TOKEN", &mut self.csrf_token);
    }
}
