use pm_db::create_memory_pool;

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    create_memory_pool()
        .await
        .expect("Failed to create test pool")
}
