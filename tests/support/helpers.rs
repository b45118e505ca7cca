// tests/support/helpers.rs
use deepdive_core::infrastructure::database;
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn migrated_memory_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}
