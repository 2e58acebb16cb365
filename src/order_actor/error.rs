//! Error types for the Order actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order has this id (e.g. discarding twice).
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A line item the store refuses to persist.
    #[error("Invalid line item for {product_id}: {reason}")]
    InvalidLineItem {
        product_id: ProductId,
        reason: &'static str,
    },

    /// The order actor could not be reached.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
