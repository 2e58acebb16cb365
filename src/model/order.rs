//! Orders and their line items.
//!
//! An order is written once by the order store and never changes afterwards; the order
//! actor has no update or action payloads at all.
use crate::model::{CustomerId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested product, priced from the catalog snapshot taken while validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLineItem {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    /// Kept in request order, duplicates included.
    pub line_items: Vec<OrderLineItem>,
}

impl Order {
    pub fn new(id: OrderId, customer_id: CustomerId, line_items: Vec<OrderLineItem>) -> Self {
        Self {
            id,
            customer_id,
            line_items,
        }
    }

    /// Sum of `unit_price * quantity` over all line items.
    pub fn total(&self) -> Decimal {
        self.line_items.iter().map(OrderLineItem::subtotal).sum()
    }
}

/// DTO for Order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub line_items: Vec<OrderLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_sums_line_subtotals() {
        let order = Order::new(
            OrderId(1),
            CustomerId(1),
            vec![
                OrderLineItem {
                    product_id: ProductId(1),
                    unit_price: dec!(5.00),
                    quantity: 3,
                },
                OrderLineItem {
                    product_id: ProductId(2),
                    unit_price: dec!(3.00),
                    quantity: 1,
                },
            ],
        );
        assert_eq!(order.total(), dec!(18.00));
    }

    #[test]
    fn test_total_of_empty_order_is_zero() {
        let order = Order::new(OrderId(2), CustomerId(1), vec![]);
        assert_eq!(order.total(), Decimal::ZERO);
    }

    #[test]
    fn test_ids_display_with_prefix() {
        assert_eq!(OrderId(7).to_string(), "order_7");
        assert_eq!(ProductId(3).to_string(), "product_3");
        assert_eq!(CustomerId(1).to_string(), "customer_1");
    }
}
