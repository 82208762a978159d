use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{RestaurantId, SessionId};

use super::errors::CartError;
use super::model::Cart;
use super::repository::{CartStorage, cart_storage_key};

/// Current cart snapshot of one (session, restaurant) pair, mirrored to
/// session storage.
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    session_id: SessionId,
    key: String,
    cart: Cart,
}

impl CartStore {
    /// Hydrates the cart from storage. A missing entry is an empty cart;
    /// an unreadable one is reported, never silently dropped.
    pub async fn load(
        storage: Arc<dyn CartStorage>,
        session_id: SessionId,
        restaurant_id: &RestaurantId,
    ) -> Result<Self, CartError> {
        let key = cart_storage_key(restaurant_id);
        let cart = match storage.get_item(&session_id, &key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|_| CartError::CorruptedStorage)?,
            None => Cart::empty(),
        };

        Ok(Self {
            storage,
            session_id,
            key,
            cart,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn into_cart(self) -> Cart {
        self.cart
    }

    /// Runs a mutation against the snapshot and writes the result once.
    /// The in-memory snapshot only changes if the write succeeded.
    pub async fn apply<F>(&mut self, mutation: F) -> Result<&Cart, CartError>
    where
        F: FnOnce(Cart) -> Result<Cart, CartError>,
    {
        let next = mutation(self.cart.clone())?;
        self.persist(&next).await?;
        self.cart = next;
        Ok(&self.cart)
    }

    async fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart).map_err(|_| RepositoryError::serialization())?;
        self.storage
            .set_item(&self.session_id, &self.key, &raw)
            .await?;
        Ok(())
    }
}
