use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use tokio_util::sync::CancellationToken;

use business::domain::checkout::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::shared::value_objects::RestaurantId;

use crate::api::checkout::dto::{CheckoutRequest, CheckoutResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::auth::SessionAuth;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    shutdown: CancellationToken,
}

impl CheckoutApi {
    /// `shutdown` is cancelled when the server stops; each request gets a
    /// child token that is also cancelled if the request is dropped.
    pub fn new(checkout_use_case: Arc<dyn CheckoutUseCase>, shutdown: CancellationToken) -> Self {
        Self {
            checkout_use_case,
            shutdown,
        }
    }
}

#[OpenApi]
impl CheckoutApi {
    /// Start checkout
    ///
    /// Sends the cart and delivery details to the payment provider and
    /// returns the hosted checkout page URL. The cart is left untouched.
    #[oai(
        path = "/restaurants/:restaurant_id/checkout",
        method = "post",
        tag = "ApiTags::Checkout"
    )]
    async fn checkout(
        &self,
        auth: SessionAuth,
        restaurant_id: Path<String>,
        body: Json<CheckoutRequest>,
    ) -> StartCheckoutResponse {
        let cancellation = self.shutdown.child_token();
        let _cancel_on_drop = cancellation.clone().drop_guard();

        let params = CheckoutParams {
            session_id: auth.0,
            restaurant_id: RestaurantId::from(restaurant_id.0),
            delivery_details: body.0.delivery_details.into(),
            cancellation,
        };

        match self.checkout_use_case.execute(params).await {
            Ok(session) => StartCheckoutResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => StartCheckoutResponse::NotFound(json),
                    409 => StartCheckoutResponse::Conflict(json),
                    422 => StartCheckoutResponse::UnprocessableEntity(json),
                    502 => StartCheckoutResponse::BadGateway(json),
                    503 => StartCheckoutResponse::ServiceUnavailable(json),
                    _ => StartCheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartCheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
