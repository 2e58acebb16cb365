//! # Order Actor
//!
//! The order store. Orders are created once and never modified; see [`entity`].
//!
//! The actor has no dependencies (`Context = ()`). Cross-resource validation lives in
//! [`CreateOrder`](crate::create_order::CreateOrder), which only asks the store to persist
//! an already validated order.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
