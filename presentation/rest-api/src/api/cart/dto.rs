use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Menu item to add. Name and price are taken from the restaurant menu.
    pub menu_item_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Menu item identifier
    pub menu_item_id: String,
    pub name: String,
    /// Unit price in the smallest currency unit
    pub price: u64,
    /// Always at least 1
    pub quantity: u32,
    /// price × quantity
    pub line_total: u64,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            menu_item_id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Lines in insertion order
    pub items: Vec<CartItemResponse>,
    /// Sum of all quantities
    pub item_count: u64,
    /// Sum of all line totals
    pub subtotal: u64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self::from(&cart)
    }
}
