use pm_config::SecurityConfig;

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Expected `X-CSRF-Token` value, `None` when the check is disabled
    pub csrf_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, security: &SecurityConfig) -> Self {
        let csrf_token = security.csrf_enabled.then(|| {
            let token = security
                .csrf_token
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().simple().to_string());
            Arc::from(token)
        });

        Self { pool, csrf_token }
    }

    /// State without the CSRF check, for tools and tests.
    pub fn without_csrf(pool: SqlitePool) -> Self {
        Self {
            pool,
            csrf_token: None,
        }
    }
}
