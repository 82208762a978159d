use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migrations_not_found")]
    MigrationsNotFound,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the session storage database
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool settings
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Could not connect to session storage database: {e}");
            DatabaseError::ConnectionError
        })
}

/// Applies the SQL migrations found in `migrations_path`
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        return Err(DatabaseError::MigrationsNotFound);
    }

    let migrator = sqlx::migrate::Migrator::new(path).await.map_err(|e| {
        tracing::error!("Could not read migrations from {migrations_path}: {e}");
        DatabaseError::MigrationError
    })?;

    migrator.run(pool).await.map_err(|e| {
        tracing::error!("Migration failed: {e}");
        DatabaseError::MigrationError
    })
}
