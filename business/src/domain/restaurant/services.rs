use async_trait::async_trait;

use crate::domain::shared::value_objects::RestaurantId;

use super::errors::RestaurantError;
use super::model::Restaurant;

/// Service port for reading restaurant and menu data from the restaurant API.
#[async_trait]
pub trait RestaurantFetcher: Send + Sync {
    async fn fetch(&self, restaurant_id: &RestaurantId) -> Result<Restaurant, RestaurantError>;
}
