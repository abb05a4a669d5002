//! Participant store access.
//!
//! Wraps the PostgreSQL connection pool plus the repository layer. All
//! persistence, querying and row-level atomicity is delegated to the
//! database; this crate never caches state of its own.

pub mod models;
pub mod repositories;

pub use sqlx::PgPool as DbPool;

/// Create a connection pool against the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from this crate's `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
