use super::model::Cart;

/// Totals shown next to the cart. All amounts are in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub item_count: u64,
    pub subtotal: u64,
    pub delivery_price: u64,
    pub total: u64,
}

impl OrderSummary {
    pub fn new(cart: &Cart, delivery_price: u64) -> Self {
        let subtotal = cart.subtotal();
        Self {
            item_count: cart.item_count(),
            subtotal,
            delivery_price,
            total: subtotal.saturating_add(delivery_price),
        }
    }
}
