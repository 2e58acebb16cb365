//! # Domain Model
//!
//! Plain data types for customers, products and orders. Each entity type implements
//! [`ActorEntity`](actor_framework::ActorEntity) in its actor module, keeping the
//! model free of actor concerns.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
