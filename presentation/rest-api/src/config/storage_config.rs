use std::env;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, bail};
use business::domain::cart::repository::CartStorage;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::session_storage::memory::SessionStorageInMemory;
use persistence::session_storage::purge::StaleSessionPurge;
use persistence::session_storage::repository::SessionStorageRepositoryPostgres;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Where carts are kept between requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartStorageBackend {
    Postgres,
    Memory,
}

impl FromStr for CartStorageBackend {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => bail!("CART_STORAGE must be 'postgres' or 'memory', got '{other}'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: CartStorageBackend,
    pub database_url: Option<String>,
    pub migrations_path: String,
    pub session_ttl: chrono::Duration,
}

/// Initialized cart storage. Backends that do not expire idle sessions by
/// themselves also hand out a purge the server runs periodically.
pub struct CartStorageHandle {
    pub storage: Arc<dyn CartStorage>,
    pub purge: Option<Arc<dyn StaleSessionPurge>>,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORAGE: "postgres" or "memory" (default: "postgres")
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - DATABASE_MIGRATIONS: migrations directory
    ///   (default: "./infrastructure/persistence/migrations")
    /// - CART_SESSION_TTL_HOURS: idle hours before a session is purged (default: 24)
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = env::var("CART_STORAGE")
            .map(|raw| raw.parse::<CartStorageBackend>())
            .unwrap_or(Ok(CartStorageBackend::Postgres))?;

        let database_url = env::var("DATABASE_URL").ok();
        if backend == CartStorageBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when CART_STORAGE is postgres");
        }

        let migrations_path = env::var("DATABASE_MIGRATIONS")
            .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        let session_ttl = match env::var("CART_SESSION_TTL_HOURS") {
            Ok(raw) => parse_ttl_hours(&raw)?,
            Err(_) => chrono::Duration::hours(DEFAULT_SESSION_TTL_HOURS),
        };

        Ok(Self {
            backend,
            database_url,
            migrations_path,
            session_ttl,
        })
    }

    /// Connects the configured backend, running migrations for Postgres
    pub async fn init_storage(&self) -> anyhow::Result<CartStorageHandle> {
        match self.backend {
            CartStorageBackend::Memory => {
                tracing::warn!("Cart storage is in memory, carts are lost on restart");
                let time_to_idle = self
                    .session_ttl
                    .to_std()
                    .context("CART_SESSION_TTL_HOURS is out of range")?;
                Ok(CartStorageHandle {
                    storage: Arc::new(SessionStorageInMemory::new(time_to_idle)),
                    purge: None,
                })
            }
            CartStorageBackend::Postgres => {
                let url = self
                    .database_url
                    .clone()
                    .context("DATABASE_URL must be set")?;
                let pool = create_postgres_pool(&DatabaseConfig::new(url)).await?;
                run_migrations(&pool, &self.migrations_path).await?;

                let repository = Arc::new(SessionStorageRepositoryPostgres::new(pool));
                Ok(CartStorageHandle {
                    storage: repository.clone(),
                    purge: Some(repository),
                })
            }
        }
    }
}

fn parse_ttl_hours(raw: &str) -> anyhow::Result<chrono::Duration> {
    let hours: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("CART_SESSION_TTL_HOURS is not a number: '{raw}'"))?;
    if hours <= 0 {
        bail!("CART_SESSION_TTL_HOURS must be positive");
    }
    Ok(chrono::Duration::hours(hours))
}
