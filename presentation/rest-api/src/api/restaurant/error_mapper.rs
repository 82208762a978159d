use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::restaurant::errors::RestaurantError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for RestaurantError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            RestaurantError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "restaurant.not_found")
            }
            RestaurantError::FetchFailed => error_response(
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "restaurant.fetch_failed",
            ),
            RestaurantError::Cart(err) => err.into_error_response(),
        }
    }
}
