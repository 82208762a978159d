#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.restaurant_not_found")]
    RestaurantNotFound,
    #[error("checkout.restaurant_unavailable")]
    RestaurantUnavailable,
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.already_in_progress")]
    AlreadyInProgress,
    #[error("checkout.cancelled")]
    Cancelled,
    #[error("checkout.session_creation_failed")]
    SessionCreationFailed,
    #[error("checkout.invalid_redirect_url")]
    InvalidRedirectUrl,
    #[error("checkout.cart_unavailable")]
    Cart(#[from] crate::domain::cart::errors::CartError),
}
