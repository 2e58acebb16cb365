//! # Order Creation
//!
//! The business rule of the crate: turn an [`OrderRequest`] into a persisted
//! [`Order`](crate::model::Order), or into a [`CreateOrderError`] that names every problem.
//!
//! [`CreateOrder`] is generic over three narrow collaborator traits ([`ports`]); it never
//! talks to actors directly.
//!
//! ```rust
//! use order_desk::create_order::{OrderItemRequest, OrderRequest};
//! use order_desk::lifecycle::OrderSystem;
//! use order_desk::model::{CustomerCreate, ProductCreate};
//! use rust_decimal::Decimal;
//! use std::num::NonZeroU32;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = OrderSystem::new();
//!     let customer = system
//!         .customer_client
//!         .create_customer(CustomerCreate {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!     let widget = system
//!         .product_client
//!         .create_product(ProductCreate {
//!             name: "Widget".to_string(),
//!             price: Decimal::new(500, 2),
//!             quantity: 10,
//!         })
//!         .await?;
//!
//!     let three = NonZeroU32::new(3).ok_or("zero")?;
//!     let request = OrderRequest::new(customer.id, vec![OrderItemRequest::new(widget.id, three)]);
//!     let order = system.create_order().execute(request).await?;
//!     assert_eq!(order.total(), Decimal::new(1500, 2));
//!     assert_eq!(system.product_client.check_stock(widget.id).await?, 7);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod operation;
pub mod ports;
pub mod request;

pub use error::*;
pub use operation::CreateOrder;
pub use ports::*;
pub use request::*;
