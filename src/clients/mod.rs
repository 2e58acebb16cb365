//! # Resource Clients
//!
//! Thin wrappers around [`ResourceClient<T>`](actor_framework::ResourceClient) that speak the
//! domain's language: typed payloads in, typed results and per-actor errors out.
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient) for the shared
//! `get` / `get_many` / `delete` calls and one of the collaborator traits of
//! [`create_order`](crate::create_order), so the operation runs unchanged against real
//! actors or [`MockClient`](actor_framework::mock::MockClient)-backed ones.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
