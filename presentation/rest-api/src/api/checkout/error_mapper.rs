use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CheckoutError::RestaurantNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "checkout.restaurant_not_found",
            ),
            CheckoutError::EmptyCart => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "checkout.empty_cart",
            ),
            CheckoutError::AlreadyInProgress => error_response(
                StatusCode::CONFLICT,
                "Conflict",
                "checkout.already_in_progress",
            ),
            CheckoutError::Cancelled => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Cancelled",
                "checkout.cancelled",
            ),
            CheckoutError::RestaurantUnavailable => error_response(
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "checkout.restaurant_unavailable",
            ),
            CheckoutError::SessionCreationFailed => error_response(
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "checkout.session_creation_failed",
            ),
            CheckoutError::InvalidRedirectUrl => error_response(
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "checkout.invalid_redirect_url",
            ),
            CheckoutError::Cart(err) => err.into_error_response(),
        }
    }
}
