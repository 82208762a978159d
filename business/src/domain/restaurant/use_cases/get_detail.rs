use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::summary::OrderSummary;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::shared::value_objects::{RestaurantId, SessionId};

pub struct GetRestaurantDetailParams {
    pub session_id: SessionId,
    pub restaurant_id: RestaurantId,
}

/// Everything the restaurant detail page renders: menu, cart and totals.
#[derive(Debug, Clone)]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub cart: Cart,
    pub summary: OrderSummary,
    pub checkout_in_progress: bool,
}

#[async_trait]
pub trait GetRestaurantDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRestaurantDetailParams,
    ) -> Result<RestaurantDetail, RestaurantError>;
}
