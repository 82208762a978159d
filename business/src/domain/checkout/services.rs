use async_trait::async_trait;

use super::errors::CheckoutError;
use super::model::{CheckoutSession, CheckoutSessionRequest};

/// Service port for creating hosted checkout sessions.
#[async_trait]
pub trait CheckoutSessionGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, CheckoutError>;
}
