//! PostgreSQL access: pool setup, migrations, row models, the listing query
//! builder and per-table repositories.

pub mod models;
pub mod query;
pub mod repositories;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// How long a query waits for a pooled connection before failing.
///
/// Must stay below the HTTP request timeout so an unreachable database
/// surfaces as a query error rather than a timed-out request.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool settings shared by [`create_pool`] and lazily connected pools.
pub fn pool_options(acquire_timeout: Duration) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(acquire_timeout)
}

/// Create a connection pool from a database URL.
pub async fn create_pool(
    database_url: &str,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    pool_options(acquire_timeout).connect(database_url).await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
