//! # Order Client
//!
//! High-level API for the `Order` actor; also the [`OrderStore`] used by order creation.
use crate::create_order::OrderStore;
use crate::model::{Customer, Order, OrderCreate, OrderId, OrderLineItem};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    async fn create(
        &self,
        customer: &Customer,
        line_items: Vec<OrderLineItem>,
    ) -> Result<Order, OrderError> {
        self.create_order(OrderCreate {
            customer_id: customer.id,
            line_items,
        })
        .await
    }

    async fn discard(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}
