use async_trait::async_trait;
use chrono::Duration;

use business::domain::errors::RepositoryError;

/// Session storage that has to be told to drop idle sessions.
#[async_trait]
pub trait StaleSessionPurge: Send + Sync {
    /// Deletes entries idle for longer than `max_idle` and returns how many
    /// were removed.
    async fn delete_stale(&self, max_idle: Duration) -> Result<u64, RepositoryError>;
}
