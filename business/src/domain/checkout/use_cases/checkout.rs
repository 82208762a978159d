use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CheckoutSession, DeliveryDetails};
use crate::domain::shared::value_objects::{RestaurantId, SessionId};

pub struct CheckoutParams {
    pub session_id: SessionId,
    pub restaurant_id: RestaurantId,
    pub delivery_details: DeliveryDetails,
    /// Cancelled when the caller is gone; a late API answer is then discarded.
    pub cancellation: CancellationToken,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutSession, CheckoutError>;
}
