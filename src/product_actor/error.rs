//! Error types for the Product actor.

use crate::model::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The stock changed between the read and the compare-and-set write.
    #[error("Stock conflict on {product_id}: expected {expected}, found {actual}")]
    StockConflict {
        product_id: ProductId,
        expected: u32,
        actual: u32,
    },

    /// Restocking would overflow the stock counter.
    #[error("Stock overflow on {product_id}: {quantity} + {added}")]
    StockOverflow {
        product_id: ProductId,
        quantity: u32,
        added: u32,
    },

    /// Prices are never negative.
    #[error("Negative price: {0}")]
    NegativePrice(Decimal),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
