use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{MenuItemId, RestaurantId, SessionId};

pub struct AddToCartParams {
    pub session_id: SessionId,
    pub restaurant_id: RestaurantId,
    pub menu_item_id: MenuItemId,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError>;
}
