use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{MenuItemId, RestaurantId};

/// Contact and shipping data entered by the user. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub email: String,
    pub name: String,
    pub address_line1: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCartItem {
    pub menu_item_id: MenuItemId,
    pub name: String,
    /// Sent as text, as the checkout API expects.
    pub quantity: String,
}

/// Payload sent to the checkout-session API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionRequest {
    pub cart_items: Vec<CheckoutCartItem>,
    pub delivery_details: DeliveryDetails,
    pub restaurant_id: RestaurantId,
}

impl CheckoutSessionRequest {
    pub fn from_cart(
        cart: &Cart,
        delivery_details: DeliveryDetails,
        restaurant_id: RestaurantId,
    ) -> Self {
        let cart_items = cart
            .items()
            .iter()
            .map(|item| CheckoutCartItem {
                menu_item_id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity.to_string(),
            })
            .collect();

        Self {
            cart_items,
            delivery_details,
            restaurant_id,
        }
    }
}

/// A hosted checkout page the user is redirected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub url: Url,
}
