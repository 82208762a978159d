use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::shared::value_objects::{RestaurantId, SessionId};

type CheckoutKey = (SessionId, RestaurantId);

/// Tracks checkouts that are waiting on the checkout API, one per
/// (session, restaurant). Acts as the loading flag of the checkout button.
#[derive(Debug, Default)]
pub struct CheckoutInFlight {
    keys: Mutex<HashSet<CheckoutKey>>,
}

impl CheckoutInFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a checkout as started. Returns `None` if one is already running
    /// for the same cart. The flag clears when the guard is dropped.
    pub fn try_begin(
        self: &Arc<Self>,
        session_id: SessionId,
        restaurant_id: &RestaurantId,
    ) -> Option<CheckoutInFlightGuard> {
        let key = (session_id, restaurant_id.clone());
        let inserted = self
            .keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone());

        inserted.then(|| CheckoutInFlightGuard {
            registry: Arc::clone(self),
            key,
        })
    }

    pub fn is_in_progress(&self, session_id: SessionId, restaurant_id: &RestaurantId) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(session_id, restaurant_id.clone()))
    }
}

#[derive(Debug)]
pub struct CheckoutInFlightGuard {
    registry: Arc<CheckoutInFlight>,
    key: CheckoutKey,
}

impl Drop for CheckoutInFlightGuard {
    fn drop(&mut self) {
        self.registry
            .keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
