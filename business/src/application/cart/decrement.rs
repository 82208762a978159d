use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::write_lock::CartWriteLocks;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStorage;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::decrement::{
    DecrementQuantityParams, DecrementQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct DecrementQuantityUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub locks: Arc<CartWriteLocks>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DecrementQuantityUseCase for DecrementQuantityUseCaseImpl {
    async fn execute(&self, params: DecrementQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Decrementing menu item {} in cart of restaurant {}",
            params.menu_item_id, params.restaurant_id
        ));

        let _guard = self
            .locks
            .acquire(params.session_id, &params.restaurant_id)
            .await;
        let mut store = CartStore::load(
            self.storage.clone(),
            params.session_id,
            &params.restaurant_id,
        )
        .await?;

        // Dropping the last unit removes the line within the same single write.
        store
            .apply(|cart| cart.decrement(&params.menu_item_id))
            .await
            .inspect_err(|e| {
                self.logger.warn(&format!(
                    "Could not decrement menu item {}: {}",
                    params.menu_item_id, e
                ))
            })?;

        Ok(store.into_cart())
    }
}
