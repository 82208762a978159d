use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use business::domain::cart::repository::CartStorage;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

/// Upper bound on stored carts, whatever the idle timeout.
const MAX_ENTRIES: u64 = 100_000;

/// Process-local session storage. Entries vanish on restart or after
/// `time_to_idle` without a read or write.
#[derive(Clone)]
pub struct SessionStorageInMemory {
    entries: Cache<(SessionId, String), String>,
}

impl SessionStorageInMemory {
    pub fn new(time_to_idle: Duration) -> Self {
        Self::with_capacity(time_to_idle, MAX_ENTRIES)
    }

    pub fn with_capacity(time_to_idle: Duration, max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(time_to_idle)
            .build();
        Self { entries }
    }

    /// Number of live entries once pending evictions have run.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

#[async_trait]
impl CartStorage for SessionStorageInMemory {
    async fn get_item(
        &self,
        session_id: &SessionId,
        key: &str,
    ) -> Result<Option<String>, RepositoryError> {
        Ok(self.entries.get(&(*session_id, key.to_string())).await)
    }

    async fn set_item(
        &self,
        session_id: &SessionId,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        self.entries
            .insert((*session_id, key.to_string()), value.to_string())
            .await;
        Ok(())
    }
}
