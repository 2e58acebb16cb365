//! # Product Actor
//!
//! The product catalog: prices and stock levels, with custom actions for stock movements.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Stock writes
//!
//! Order creation writes stock as a batch of `SetQuantity { expected, quantity }` actions.
//! The actor applies the batch all-or-nothing, so either every product still holds the
//! quantity the order was validated against and all of them are written, or nothing is.
//!
//! ```rust
//! use order_desk::clients::ProductClient;
//! use order_desk::model::{ProductCreate, StockUpdate};
//! use order_desk::product_actor::{self, ProductError};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         price: Decimal::new(2999, 2),
//!         quantity: 100,
//!     };
//!     let widget = client.create_product(params).await?;
//!
//!     let stale = StockUpdate { product_id: widget.id, expected: 99, quantity: 95 };
//!     let err = client.set_quantities(vec![stale]).await.unwrap_err();
//!     assert!(matches!(err, ProductError::StockConflict { actual: 100, .. }));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
