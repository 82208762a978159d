use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::ItemNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found")
            }
            CartError::MenuItemNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.menu_item_not_found",
            ),
            CartError::RestaurantNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.restaurant_not_found",
            ),
            CartError::RestaurantUnavailable => error_response(
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "cart.restaurant_unavailable",
            ),
            CartError::InvalidQuantity => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "cart.invalid_quantity",
            ),
            CartError::CorruptedStorage | CartError::DuplicatedItem => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "cart.corrupted_storage",
            ),
            CartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
