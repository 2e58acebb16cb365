//! # Actor Framework
//!
//! Building blocks for resource-oriented actors on Tokio: each resource type (customers,
//! products, orders) gets one actor task that owns its store and handles requests
//! sequentially, and any number of cheap cloneable clients that talk to it over a bounded
//! channel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain model, DTOs, actions and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - mailbox loop and store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Requests
//!
//! Besides CRUD and single actions, the actor serves two set-oriented requests:
//!
//! - `get_many` returns the existing entities among a list of ids in one round trip;
//!   unknown ids are omitted rather than reported.
//! - `perform_batch` applies several actions all-or-nothing. Since the actor is the only
//!   writer of its store, a batch can implement compare-and-set across several entities
//!   without locks.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when the loop starts (`run(context)`), not at construction,
//! so actors can be created first and wired afterwards.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Bin { id: u32, count: u32 }
//! #[derive(Debug)] struct BinCreate { count: u32 }
//! #[derive(Debug)] struct BinUpdate;
//! #[derive(Debug)] enum BinAction { Take(u32) }
//! #[derive(Debug, thiserror::Error)]
//! enum BinError {
//!     #[error("bin {0} has only {1} left")]
//!     Short(u32, u32),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32; type Create = BinCreate; type Update = BinUpdate;
//!     type Action = BinAction; type ActionResult = u32; type Context = (); type Error = BinError;
//!
//!     fn from_create_params(id: u32, p: BinCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, count: p.count })
//!     }
//!     async fn on_update(&mut self, _: BinUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, action: BinAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             BinAction::Take(n) if n <= self.count => { self.count -= n; Ok(self.count) }
//!             BinAction::Take(_) => Err(BinError::Short(self.id, self.count)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client): (_, ResourceClient<Bin>) = ResourceActor::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let a = client.create(BinCreate { count: 5 }).await.unwrap();
//!     let b = client.create(BinCreate { count: 1 }).await.unwrap();
//!
//!     // The second action fails, so neither bin changes.
//!     let batch = vec![(a.id, BinAction::Take(2)), (b.id, BinAction::Take(3))];
//!     assert!(client.perform_batch(batch).await.is_err());
//!     assert_eq!(client.get(a.id).await.unwrap().unwrap().count, 5);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] serves a real `ResourceClient<T>` from scripted expectations, so code
//! that depends on a client can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
