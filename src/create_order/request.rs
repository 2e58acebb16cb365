//! Input of [`CreateOrder::execute`](super::CreateOrder::execute).
use crate::model::{CustomerId, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::num::NonZeroU32;

/// One requested line. Zero quantities cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: NonZeroU32,
}

impl OrderItemRequest {
    pub fn new(product_id: ProductId, quantity: NonZeroU32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A customer's request for a list of products.
///
/// Lines are kept in the order given. The same product may appear on several lines;
/// each line is validated and priced on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_id: CustomerId,
    pub items: Vec<OrderItemRequest>,
}

impl OrderRequest {
    pub fn new(customer_id: CustomerId, items: Vec<OrderItemRequest>) -> Self {
        Self { customer_id, items }
    }

    /// Requested product ids, first occurrence order, without repeats.
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.product_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}
