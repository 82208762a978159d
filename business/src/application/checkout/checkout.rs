use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartStorage;
use crate::domain::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::in_flight::CheckoutInFlight;
use crate::domain::checkout::model::{CheckoutSession, CheckoutSessionRequest};
use crate::domain::checkout::services::CheckoutSessionGateway;
use crate::domain::checkout::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::services::RestaurantFetcher;

pub struct CheckoutUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub restaurants: Arc<dyn RestaurantFetcher>,
    pub gateway: Arc<dyn CheckoutSessionGateway>,
    pub in_flight: Arc<CheckoutInFlight>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutSession, CheckoutError> {
        self.logger.info(&format!(
            "Starting checkout for restaurant {}",
            params.restaurant_id
        ));

        let _in_flight = self
            .in_flight
            .try_begin(params.session_id, &params.restaurant_id)
            .ok_or(CheckoutError::AlreadyInProgress)?;

        let restaurant = self
            .restaurants
            .fetch(&params.restaurant_id)
            .await
            .map_err(|e| match e {
                RestaurantError::NotFound => CheckoutError::RestaurantNotFound,
                _ => CheckoutError::RestaurantUnavailable,
            })?;

        let store = CartStore::load(
            self.storage.clone(),
            params.session_id,
            &params.restaurant_id,
        )
        .await?;
        if store.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let request =
            CheckoutSessionRequest::from_cart(store.cart(), params.delivery_details, restaurant.id);

        let session = tokio::select! {
            biased;
            _ = params.cancellation.cancelled() => {
                self.logger.warn(&format!(
                    "Checkout for restaurant {} cancelled before the session was created",
                    params.restaurant_id
                ));
                return Err(CheckoutError::Cancelled);
            }
            result = self.gateway.create_checkout_session(&request) => result,
        }
        .inspect_err(|e| self.logger.error(&format!("Checkout session failed: {}", e)))?;

        // The caller may have gone away while the answer was in transit.
        if params.cancellation.is_cancelled() {
            self.logger.warn("Discarding checkout session created after cancellation");
            return Err(CheckoutError::Cancelled);
        }

        self.logger.info(&format!(
            "Checkout session created for restaurant {} with {} lines",
            params.restaurant_id,
            request.cart_items.len()
        ));
        Ok(session)
    }
}
