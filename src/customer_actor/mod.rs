//! # Customer Actor
//!
//! Holds the customer directory. The simplest actor in the system: no dependencies
//! (`Context = ()`) and no custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_desk::clients::CustomerClient;
//! use order_desk::create_order::CustomerDirectory;
//! use order_desk::customer_actor;
//! use order_desk::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = customer_actor::new(32);
//!     let client = CustomerClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = CustomerCreate {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!     };
//!     let customer = client.create_customer(params).await?;
//!     assert!(client.find_by_id(customer.id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Customer;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
