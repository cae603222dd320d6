//! Document persistence for tracks and user vote records.
//!
//! The [`store::DocumentStore`] trait is the only seam to the backing
//! database. [`pg_store::PgDocumentStore`] keeps documents as JSONB rows in
//! PostgreSQL; [`memory_store::MemoryDocumentStore`] keeps them in process.

use sqlx::postgres::PgPoolOptions;

pub mod memory_store;
pub mod pg_store;
pub mod repositories;
pub mod seed;
pub mod store;
pub mod voting;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
