//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors behind the order desk.
//!
//! 1. **Actor Creation** - one `ResourceActor` per resource, sized from [`SystemConfig`](crate::config::SystemConfig)
//! 2. **Start** - each actor's `run(())` loop on its own Tokio task
//! 3. **Wiring** - the typed clients, and [`OrderSystem::create_order`] combining them
//! 4. **Graceful Shutdown** - drop the clients, then await the actor tasks
//!
//! Dependencies would be injected through `run(context)` ("late binding"), which lets
//! actors be created before the clients they need exist. The order desk keeps every
//! actor independent, so each context is `()`.

mod order_system;

pub use order_system::{OrderSystem, ShutdownError};
