use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::SystemConfig;
use crate::create_order::CreateOrder;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors from shutting the system down.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator of the order desk.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the three actors
/// - **Wiring**: handing out the clients and a [`CreateOrder`] built from them
///
/// # Architecture
///
/// - **Customer Actor**: the customer directory
/// - **Product Actor**: prices and stock, with compare-and-set stock writes
/// - **Order Actor**: write-once order storage
///
/// None of the actors depends on another; every actor runs with `Context = ()`.
/// Cross-resource rules live in [`CreateOrder`].
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::from_config(&SystemConfig::from_env()?);
/// let order = system.create_order().execute(request).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts every actor with default mailbox capacities.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::from_config(&SystemConfig::default())
    }

    /// Starts every actor with the capacities from `config`.
    pub fn from_config(config: &SystemConfig) -> Self {
        // 1. Create actors
        let (customer_actor, customer_client) =
            crate::customer_actor::new(config.customer_buffer);
        let (product_actor, product_client) = crate::product_actor::new(config.product_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.order_buffer);

        // 2. Start actors (no dependencies, Context = ())
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];
        info!(?config, "Order system started");

        Self {
            customer_client: CustomerClient::new(customer_client),
            product_client: ProductClient::new(product_client),
            order_client: OrderClient::new(order_client),
            handles,
        }
    }

    /// An order creation operation backed by this system's actors.
    ///
    /// The operation holds client clones; drop it before [`shutdown`](Self::shutdown),
    /// which waits for every client to be gone.
    pub fn create_order(&self) -> CreateOrder<CustomerClient, ProductClient, OrderClient> {
        CreateOrder::new(
            self.customer_client.clone(),
            self.product_client.clone(),
            self.order_client.clone(),
        )
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the mailboxes; each actor drains what is queued and
    /// exits its loop. Fails if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        // Step 1: close all channels by dropping clients
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        // Step 2: wait for all actor tasks to complete
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
