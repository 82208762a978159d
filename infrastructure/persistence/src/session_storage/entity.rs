use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct SessionStorageEntity {
    pub session_id: Uuid,
    pub storage_key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
