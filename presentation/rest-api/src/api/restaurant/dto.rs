use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::summary::OrderSummary;
use business::domain::restaurant::model::{MenuItem, Restaurant};
use business::domain::restaurant::use_cases::get_detail::RestaurantDetail;

use crate::api::cart::dto::CartResponse;

#[derive(Debug, Clone, Object)]
pub struct MenuItemResponse {
    /// Menu item identifier, used to add it to the cart
    pub id: String,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: u64,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RestaurantResponse {
    pub id: String,
    pub restaurant_name: String,
    pub city: String,
    pub country: String,
    /// Delivery price in the smallest currency unit
    pub delivery_price: u64,
    /// Estimated delivery time in minutes
    pub estimated_delivery_time: u32,
    pub cuisines: Vec<String>,
    pub menu_items: Vec<MenuItemResponse>,
    pub image_url: String,
    #[oai(skip_serializing_if_is_none)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id.to_string(),
            restaurant_name: restaurant.restaurant_name,
            city: restaurant.city,
            country: restaurant.country,
            delivery_price: restaurant.delivery_price,
            estimated_delivery_time: restaurant.estimated_delivery_time,
            cuisines: restaurant.cuisines,
            menu_items: restaurant
                .menu_items
                .into_iter()
                .map(MenuItemResponse::from)
                .collect(),
            image_url: restaurant.image_url,
            last_updated: restaurant.last_updated,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderSummaryResponse {
    pub item_count: u64,
    pub subtotal: u64,
    pub delivery_price: u64,
    /// subtotal + delivery price
    pub total: u64,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            item_count: summary.item_count,
            subtotal: summary.subtotal,
            delivery_price: summary.delivery_price,
            total: summary.total,
        }
    }
}

/// Restaurant page: menu, the session's cart and the order totals
#[derive(Debug, Clone, Object)]
pub struct RestaurantDetailResponse {
    pub restaurant: RestaurantResponse,
    pub cart: CartResponse,
    pub summary: OrderSummaryResponse,
    /// True while a checkout for this cart waits on the payment provider
    pub checkout_in_progress: bool,
}

impl From<RestaurantDetail> for RestaurantDetailResponse {
    fn from(detail: RestaurantDetail) -> Self {
        Self {
            cart: CartResponse::from(&detail.cart),
            restaurant: detail.restaurant.into(),
            summary: detail.summary.into(),
            checkout_in_progress: detail.checkout_in_progress,
        }
    }
}
