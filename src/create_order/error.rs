//! Failures of [`CreateOrder::execute`](super::CreateOrder::execute).
//!
//! Validation failures keep every offending line as a structured record; the
//! human-readable message is only produced by `Display`.
use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, OrderId, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

/// A requested line the snapshot cannot cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub product_id: ProductId,
    pub requested: u32,
    pub available: u32,
}

impl Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quantity {} for product {} not available ({} in stock)",
            self.requested, self.product_id, self.available
        )
    }
}

fn invalid_products(ids: &[ProductId]) -> String {
    ids.iter()
        .map(|id| format!("Invalid product: {id}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn shortfalls(records: &[Shortfall]) -> String {
    records
        .iter()
        .map(Shortfall::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn fate(compensated: &bool) -> &'static str {
    if *compensated {
        "order discarded"
    } else {
        "order kept without stock update"
    }
}

/// Errors returned by order creation, checked in declaration order.
///
/// The first three are validation failures: nothing was written. `StockUpdateFailed`
/// happens after the order was persisted; `compensated` tells whether it was discarded
/// again. The remaining variants carry collaborator failures unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    #[error("Invalid customer: {0}")]
    InvalidCustomer(CustomerId),

    /// Every requested line whose product does not exist, in request order.
    #[error("{}", invalid_products(.0))]
    InvalidProduct(Vec<ProductId>),

    /// Every requested line asking for more than the snapshot holds, in request order.
    #[error("{}", shortfalls(.0))]
    InsufficientQuantity(Vec<Shortfall>),

    #[error("Stock update failed for {order_id}, {}: {reason}", fate(.compensated))]
    StockUpdateFailed {
        order_id: OrderId,
        compensated: bool,
        #[source]
        reason: ProductError,
    },

    #[error(transparent)]
    Customers(#[from] CustomerError),

    #[error(transparent)]
    Products(#[from] ProductError),

    #[error(transparent)]
    Orders(#[from] OrderError),
}
