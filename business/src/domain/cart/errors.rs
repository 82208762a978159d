#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.menu_item_not_found")]
    MenuItemNotFound,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.duplicated_item")]
    DuplicatedItem,
    #[error("cart.corrupted_storage")]
    CorruptedStorage,
    #[error("cart.restaurant_not_found")]
    RestaurantNotFound,
    #[error("cart.restaurant_unavailable")]
    RestaurantUnavailable,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
