//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresElectiveCycleRepository` - Elective cycle persistence
//! - `PostgresInstitutionRepository` - Institution directory and cycle references

mod elective_cycle_repository;
mod institution_repository;

pub use elective_cycle_repository::PostgresElectiveCycleRepository;
pub use institution_repository::PostgresInstitutionRepository;

use sqlx::error::ErrorKind;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool sized from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))?;

    tracing::info!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Database pool established"
    );
    Ok(pool)
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Constraint class reported by the database, if any.
fn violation(err: &sqlx::Error) -> Option<ErrorKind> {
    err.as_database_error().map(|db_err| db_err.kind())
}
