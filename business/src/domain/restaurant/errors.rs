use crate::domain::cart::errors::CartError;

#[derive(Debug, thiserror::Error)]
pub enum RestaurantError {
    #[error("restaurant.not_found")]
    NotFound,
    #[error("restaurant.fetch_failed")]
    FetchFailed,
    #[error("restaurant.cart_unavailable")]
    Cart(#[from] CartError),
}
