use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use url::Url;

use business::domain::shared::value_objects::RestaurantId;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for the order backend (restaurants and checkout).
pub struct OrderApiClient {
    pub client: Client,
    pub base_url: Url,
    pub api_token: Option<String>,
}

impl OrderApiClient {
    pub fn new(
        base_url: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Ok(Self {
            client,
            base_url,
            api_token,
        })
    }

    /// `GET` endpoint returning one restaurant with its menu.
    pub fn restaurant_url(&self, restaurant_id: &RestaurantId) -> Url {
        self.endpoint(&["api", "restaurant", restaurant_id.as_str()])
    }

    /// `POST` endpoint creating a hosted checkout session.
    pub fn checkout_session_url(&self) -> Url {
        self.endpoint(&["api", "order", "checkout", "create-checkout-session"])
    }

    /// Adds the bearer token when one is configured.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
