use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::model::{CheckoutSession, CheckoutSessionRequest};
use business::domain::checkout::services::CheckoutSessionGateway;

use crate::client::OrderApiClient;

#[derive(Debug, Deserialize)]
struct CheckoutSessionDto {
    url: String,
}

pub struct CheckoutSessionGatewayHttp {
    client: OrderApiClient,
}

impl CheckoutSessionGatewayHttp {
    pub fn new(client: OrderApiClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<CheckoutSession, CheckoutError> {
        let dto: CheckoutSessionDto =
            serde_json::from_str(body).map_err(|_| CheckoutError::SessionCreationFailed)?;

        let url = Url::parse(&dto.url).map_err(|_| CheckoutError::InvalidRedirectUrl)?;
        if !matches!(url.scheme(), "https" | "http") {
            return Err(CheckoutError::InvalidRedirectUrl);
        }

        Ok(CheckoutSession { url })
    }
}

#[async_trait]
impl CheckoutSessionGateway for CheckoutSessionGatewayHttp {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let builder = self
            .client
            .client
            .post(self.client.checkout_session_url())
            .json(request);

        let response = self.client.authorize(builder).send().await.map_err(|e| {
            tracing::error!("Checkout API unreachable: {e}");
            CheckoutError::SessionCreationFailed
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|_| CheckoutError::SessionCreationFailed)?;

        if !status.is_success() {
            tracing::error!("Checkout API answered {status}: {body}");
            return Err(CheckoutError::SessionCreationFailed);
        }

        Self::parse_response(&body)
    }
}
