//! Module for database connection setup and common utilities.
//!
//! Initializes the Postgres connection pool against the hosted database
//! and runs the idempotent schema bootstrap. All actual queries live in
//! `queries`, with the row structs in `models`.

pub mod models;
pub mod queries;
pub mod schema;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    info!("Connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    schema::initialize_schema(&pool).await?;

    info!("Database initialized");
    Ok(pool)
}
