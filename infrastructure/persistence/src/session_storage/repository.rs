use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::PgPool;

use business::domain::cart::repository::CartStorage;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

use super::entity::SessionStorageEntity;
use super::purge::StaleSessionPurge;

pub struct SessionStorageRepositoryPostgres {
    pool: PgPool,
}

impl SessionStorageRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaleSessionPurge for SessionStorageRepositoryPostgres {
    async fn delete_stale(&self, max_idle: Duration) -> Result<u64, RepositoryError> {
        let cutoff = Utc::now() - max_idle;
        let result = sqlx::query("DELETE FROM session_storage WHERE updated_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Could not purge stale session storage: {e}");
                RepositoryError::DatabaseError
            })?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl CartStorage for SessionStorageRepositoryPostgres {
    async fn get_item(
        &self,
        session_id: &SessionId,
        key: &str,
    ) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, SessionStorageEntity>(
            "SELECT session_id, storage_key, value, updated_at FROM session_storage WHERE session_id = $1 AND storage_key = $2",
        )
        .bind(session_id.as_uuid())
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Could not read session storage key {key}: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(entity.map(|e| e.value))
    }

    async fn set_item(
        &self,
        session_id: &SessionId,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO session_storage (session_id, storage_key, value, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (session_id, storage_key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(session_id.as_uuid())
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Could not write session storage key {key}: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }
}
