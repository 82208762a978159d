use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{MenuItemId, RestaurantId};

/// A dish offered by a restaurant. Prices are in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: u64,
}

#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub restaurant_name: String,
    pub city: String,
    pub country: String,
    pub delivery_price: u64,
    pub estimated_delivery_time: u32,
    pub cuisines: Vec<String>,
    pub menu_items: Vec<MenuItem>,
    pub image_url: String,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Restaurant {
    pub fn menu_item(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| &item.id == id)
    }
}
