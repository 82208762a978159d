use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::write_lock::CartWriteLocks;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStorage;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub locks: Arc<CartWriteLocks>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing menu item {} from cart of restaurant {}",
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

        if store.cart().get(&params.menu_item_id).is_none() {
            self.logger.debug(&format!(
                "Menu item {} was not in the cart, nothing to remove",
                params.menu_item_id
            ));
            return Ok(store.into_cart());
        }

        store
            .apply(|cart| Ok(cart.remove(&params.menu_item_id)))
            .await?;
        Ok(store.into_cart())
    }
}
