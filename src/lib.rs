//! # Order Desk
//!
//! Order creation over an in-process, actor-backed catalog.
//!
//! - **[`create_order`]**: the operation. Validates a customer and a list of requested
//!   products, prices the lines from one catalog snapshot, persists the order and writes
//!   the stock back with compare-and-set.
//! - **[`model`]**: plain data types ([`Customer`](model::Customer),
//!   [`Product`](model::Product), [`Order`](model::Order)).
//! - **[`customer_actor`], [`product_actor`], [`order_actor`]**: `ActorEntity`
//!   implementations managed by [`actor_framework::ResourceActor`].
//! - **[`clients`]**: typed clients, implementing the collaborator traits of
//!   [`create_order`].
//! - **[`lifecycle`]**: [`OrderSystem`](lifecycle::OrderSystem) starts and stops everything.
//! - **[`config`]**: mailbox capacities from the environment.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test the operation and the clients
//! without spawning actors.

pub mod clients;
pub mod config;
pub mod create_order;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
