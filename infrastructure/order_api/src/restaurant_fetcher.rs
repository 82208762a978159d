use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

use business::domain::restaurant::errors::RestaurantError;
use business::domain::restaurant::model::{MenuItem, Restaurant};
use business::domain::restaurant::services::RestaurantFetcher;
use business::domain::shared::value_objects::{MenuItemId, RestaurantId};

use crate::client::OrderApiClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MenuItemDto {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    price: u64,
}

/// Restaurant document as served by the restaurant API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestaurantDto {
    #[serde(rename = "_id")]
    id: String,
    restaurant_name: String,
    city: String,
    country: String,
    delivery_price: u64,
    estimated_delivery_time: u32,
    #[serde(default)]
    cuisines: Vec<String>,
    #[serde(default)]
    menu_items: Vec<MenuItemDto>,
    image_url: String,
    last_updated: Option<DateTime<Utc>>,
}

impl RestaurantDto {
    fn into_domain(self) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(self.id),
            restaurant_name: self.restaurant_name,
            city: self.city,
            country: self.country,
            delivery_price: self.delivery_price,
            estimated_delivery_time: self.estimated_delivery_time,
            cuisines: self.cuisines,
            menu_items: self
                .menu_items
                .into_iter()
                .map(|item| MenuItem {
                    id: MenuItemId::new(item.id),
                    name: item.name,
                    price: item.price,
                })
                .collect(),
            image_url: self.image_url,
            last_updated: self.last_updated,
        }
    }
}

pub struct RestaurantFetcherHttp {
    client: OrderApiClient,
}

impl RestaurantFetcherHttp {
    pub fn new(client: OrderApiClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<Restaurant, RestaurantError> {
        let dto: RestaurantDto = serde_json::from_str(body).map_err(|e| {
            tracing::warn!("Unexpected restaurant payload: {e}");
            RestaurantError::FetchFailed
        })?;
        Ok(dto.into_domain())
    }
}

#[async_trait]
impl RestaurantFetcher for RestaurantFetcherHttp {
    async fn fetch(&self, restaurant_id: &RestaurantId) -> Result<Restaurant, RestaurantError> {
        let request = self
            .client
            .client
            .get(self.client.restaurant_url(restaurant_id));

        let response = self.client.authorize(request).send().await.map_err(|e| {
            tracing::error!("Restaurant API unreachable: {e}");
            RestaurantError::FetchFailed
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(RestaurantError::NotFound),
            status if !status.is_success() => {
                tracing::error!("Restaurant API answered {status} for {restaurant_id}");
                return Err(RestaurantError::FetchFailed);
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(|_| RestaurantError::FetchFailed)?;

        Self::parse_response(&body)
    }
}
