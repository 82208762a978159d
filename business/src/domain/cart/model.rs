use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::restaurant::model::MenuItem;
use crate::domain::shared::value_objects::MenuItemId;

use super::errors::CartError;

/// One line of a cart. `quantity` is never zero: a line that would drop to
/// zero is removed instead.
///
/// The serialized form keeps the `_id` key used by the stored cart format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: MenuItemId,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }

    fn bump(&mut self) -> Result<(), CartError> {
        self.quantity = self
            .quantity
            .checked_add(1)
            .ok_or(CartError::InvalidQuantity)?;
        Ok(())
    }
}

/// Ordered cart for a single restaurant, unique by menu item id.
///
/// Every mutator consumes the current snapshot and returns the next one.
/// Untouched lines keep their relative order and new lines go to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a cart from stored lines, rejecting zero quantities and
    /// duplicated ids.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.quantity == 0 {
                return Err(CartError::InvalidQuantity);
            }
            if !seen.insert(&item.id) {
                return Err(CartError::DuplicatedItem);
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &MenuItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    pub fn subtotal(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Appends a new line at quantity 1 or bumps the existing one.
    /// A line already at the maximum quantity is refused.
    pub fn add(mut self, menu_item: &MenuItem) -> Result<Self, CartError> {
        match self.items.iter_mut().find(|item| item.id == menu_item.id) {
            Some(existing) => existing.bump()?,
            None => self.items.push(CartItem {
                id: menu_item.id.clone(),
                name: menu_item.name.clone(),
                price: menu_item.price,
                quantity: 1,
            }),
        }
        Ok(self)
    }

    /// Removing an id that is not in the cart leaves it unchanged.
    pub fn remove(mut self, id: &MenuItemId) -> Self {
        self.items.retain(|item| &item.id != id);
        self
    }

    pub fn increment(mut self, id: &MenuItemId) -> Result<Self, CartError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or(CartError::ItemNotFound)?;
        item.bump()?;
        Ok(self)
    }

    /// Decrements in place, or drops the line when it is at quantity 1.
    pub fn decrement(mut self, id: &MenuItemId) -> Result<Self, CartError> {
        let position = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or(CartError::ItemNotFound)?;

        match self.items.get_mut(position) {
            Some(item) if item.quantity > 1 => item.quantity -= 1,
            _ => {
                self.items.remove(position);
            }
        }
        Ok(self)
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
