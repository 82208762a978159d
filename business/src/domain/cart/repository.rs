use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{RestaurantId, SessionId};

const CART_KEY_PREFIX: &str = "cartItems";

/// Storage key holding the cart of one restaurant inside a session.
pub fn cart_storage_key(restaurant_id: &RestaurantId) -> String {
    format!("{}-{}", CART_KEY_PREFIX, restaurant_id)
}

/// Session-scoped key/value storage. Values are opaque strings; writes
/// replace the previous value for the key.
#[async_trait]
pub trait CartStorage: Send + Sync {
    async fn get_item(
        &self,
        session_id: &SessionId,
        key: &str,
    ) -> Result<Option<String>, RepositoryError>;
    async fn set_item(
        &self,
        session_id: &SessionId,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError>;
}
