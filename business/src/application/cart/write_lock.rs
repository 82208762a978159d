use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::shared::value_objects::{RestaurantId, SessionId};

/// Serialises cart mutations per (session, restaurant) so that a
/// load → mutate → persist cycle never interleaves with another one on the
/// same cart.
#[derive(Debug, Default)]
pub struct CartWriteLocks {
    locks: Mutex<HashMap<(SessionId, RestaurantId), Arc<AsyncMutex<()>>>>,
}

impl CartWriteLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(
        &self,
        session_id: SessionId,
        restaurant_id: &RestaurantId,
    ) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries nobody holds or waits on can go.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(
                locks
                    .entry((session_id, restaurant_id.clone()))
                    .or_default(),
            )
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn should_block_second_writer_on_same_cart() {
        let locks = Arc::new(CartWriteLocks::new());
        let session_id = SessionId::generate();
        let restaurant_id = RestaurantId::from("r1");

        let guard = locks.acquire(session_id, &restaurant_id).await;

        let contender = {
            let locks = Arc::clone(&locks);
            let restaurant_id = restaurant_id.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(session_id, &restaurant_id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }

    #[tokio::test]
    async fn should_not_block_other_restaurants() {
        let locks = CartWriteLocks::new();
        let session_id = SessionId::generate();

        let _first = locks.acquire(session_id, &RestaurantId::from("r1")).await;
        let _second = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(session_id, &RestaurantId::from("r2")),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn should_forget_released_locks() {
        let locks = CartWriteLocks::new();
        let session_id = SessionId::generate();

        drop(locks.acquire(session_id, &RestaurantId::from("r1")).await);
        drop(locks.acquire(session_id, &RestaurantId::from("r2")).await);

        assert_eq!(locks.tracked(), 1);
    }
}
