use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{RestaurantId, SessionId};

pub struct GetCartParams {
    pub session_id: SessionId,
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError>;
}
