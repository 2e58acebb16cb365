//! Represents a product in the catalog.
//!
//! # Actor Framework
//! Implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`product_actor::entity`](crate::product_actor::entity); stock changes go through
//! [`ProductAction`](crate::product_actor::ProductAction).
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, never negative.
    pub price: Decimal,
    /// Units in stock.
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Available stock quantity
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// DTOs for Product creation and updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

// No quantity: stock only moves through `ProductAction`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

/// Compare-and-set write of one product's stock: applied only while the stored
/// quantity still equals `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub product_id: ProductId,
    pub expected: u32,
    pub quantity: u32,
}
