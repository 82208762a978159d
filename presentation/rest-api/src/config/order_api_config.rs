use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use order_api::client::{DEFAULT_TIMEOUT, OrderApiClient};

/// Configuration for the order backend serving restaurants and checkout
#[derive(Debug, Clone)]
pub struct OrderApiConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl OrderApiConfig {
    /// Environment variables:
    /// - ORDER_API_BASE_URL: base URL of the order backend (required)
    /// - ORDER_API_TOKEN: bearer token sent on every call (optional)
    /// - ORDER_API_TIMEOUT_SECS: request timeout (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            env::var("ORDER_API_BASE_URL").context("ORDER_API_BASE_URL must be set")?;
        let api_token = env::var("ORDER_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let timeout = match env::var("ORDER_API_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            api_token,
            timeout,
        })
    }

    pub fn client(&self) -> anyhow::Result<OrderApiClient> {
        OrderApiClient::new(&self.base_url, self.api_token.clone(), self.timeout)
            .with_context(|| format!("ORDER_API_BASE_URL is not a valid URL: '{}'", self.base_url))
    }
}

fn parse_timeout_secs(raw: &str) -> anyhow::Result<Duration> {
    let secs: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("ORDER_API_TIMEOUT_SECS is not a number: '{raw}'"))?;
    if secs <= 0 {
        bail!("ORDER_API_TIMEOUT_SECS must be positive");
    }
    Ok(Duration::from_secs(secs.unsigned_abs()))
}
