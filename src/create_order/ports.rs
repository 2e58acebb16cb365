//! The three collaborators [`CreateOrder`](super::CreateOrder) is built from.
//!
//! The actor clients in [`crate::clients`] implement them; tests can plug in the same
//! clients backed by [`MockClient`](actor_framework::mock::MockClient).

use crate::customer_actor::CustomerError;
use crate::model::{
    Customer, CustomerId, Order, OrderId, OrderLineItem, Product, ProductId, StockUpdate,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Customer lookup.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// `Ok(None)` when no customer has this id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError>;
}

/// Product lookup and stock writes.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns only the products that exist, each at most once, in request order.
    /// Unknown ids are omitted, not reported.
    async fn find_all_by_id(&self, ids: Vec<ProductId>) -> Result<Vec<Product>, ProductError>;

    /// Applies every update or none. An update whose `expected` no longer matches the
    /// stored quantity fails the whole call with [`ProductError::StockConflict`].
    async fn update_quantity(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(
        &self,
        customer: &Customer,
        line_items: Vec<OrderLineItem>,
    ) -> Result<Order, OrderError>;

    /// Removes an order that must not stand, e.g. one whose stock write failed.
    async fn discard(&self, id: OrderId) -> Result<(), OrderError>;
}
