use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStorage;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Getting cart of restaurant {}",
            params.restaurant_id
        ));
        let store = CartStore::load(
            self.storage.clone(),
            params.session_id,
            &params.restaurant_id,
        )
        .await
        .inspect_err(|e| self.logger.error(&format!("Could not load cart: {}", e)))?;

        Ok(store.into_cart())
    }
}
