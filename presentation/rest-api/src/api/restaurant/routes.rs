use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::restaurant::use_cases::get_detail::{
    GetRestaurantDetailParams, GetRestaurantDetailUseCase,
};
use business::domain::shared::value_objects::RestaurantId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::restaurant::dto::RestaurantDetailResponse;
use crate::api::session::auth::SessionAuth;
use crate::api::tags::ApiTags;

pub struct RestaurantApi {
    get_detail_use_case: Arc<dyn GetRestaurantDetailUseCase>,
}

impl RestaurantApi {
    pub fn new(get_detail_use_case: Arc<dyn GetRestaurantDetailUseCase>) -> Self {
        Self {
            get_detail_use_case,
        }
    }
}

#[OpenApi]
impl RestaurantApi {
    /// Restaurant detail page
    ///
    /// Returns the restaurant with its menu, the cart of the current session
    /// and the order summary (subtotal, delivery price, total).
    #[oai(
        path = "/restaurants/:restaurant_id",
        method = "get",
        tag = "ApiTags::Restaurants"
    )]
    async fn get_detail(
        &self,
        auth: SessionAuth,
        restaurant_id: Path<String>,
    ) -> GetRestaurantDetailResponse {
        let params = GetRestaurantDetailParams {
            session_id: auth.0,
            restaurant_id: RestaurantId::from(restaurant_id.0),
        };

        match self.get_detail_use_case.execute(params).await {
            Ok(detail) => GetRestaurantDetailResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRestaurantDetailResponse::NotFound(json),
                    502 => GetRestaurantDetailResponse::BadGateway(json),
                    _ => GetRestaurantDetailResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRestaurantDetailResponse {
    #[oai(status = 200)]
    Ok(Json<RestaurantDetailResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{SESSION_A, TestRestaurants, test_apis};
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    fn client() -> TestClient<poem::Route> {
        let apis = test_apis(TestRestaurants::burger_barn());
        let service = OpenApiService::new((apis.restaurant, apis.cart), "test", "0.1.0");
        TestClient::new(poem::Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_render_menu_cart_and_summary() {
        let client = client();
        client
            .post("/restaurants/r1/cart/items")
            .header("X-Session-Id", SESSION_A)
            .body_json(&json!({"menuItemId": "m1"}))
            .send()
            .await
            .assert_status_is_ok();

        let response = client
            .get("/restaurants/r1")
            .header("X-Session-Id", SESSION_A)
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("restaurant")
            .object()
            .get("restaurantName")
            .assert_string("Burger Barn");
        body.get("restaurant")
            .object()
            .get("menuItems")
            .array()
            .assert_len(2);
        body.get("cart").object().get("items").array().assert_len(1);
        body.get("summary").object().get("subtotal").assert_i64(900);
        body.get("summary").object().get("total").assert_i64(1150);
        body.get("checkoutInProgress").assert_bool(false);
    }

    #[tokio::test]
    async fn should_answer_not_found_for_unknown_restaurant() {
        let client = client();

        let response = client
            .get("/restaurants/nowhere")
            .header("X-Session-Id", SESSION_A)
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response
            .assert_json(json!({"name": "NotFound", "message": "restaurant.not_found"}))
            .await;
    }
}
