//! # Customer Client
//!
//! High-level API for the `Customer` actor; also the
//! [`CustomerDirectory`] used by order creation.
use crate::create_order::CustomerDirectory;
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CustomerError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CustomerError::NotFound(id),
            Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl CustomerDirectory for CustomerClient {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_find_by_id_passes_through_absence() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(CustomerId(1))
            .return_ok(Some(Customer::new(CustomerId(1), "Alice", "alice@example.com")));
        mock.expect_get(CustomerId(2)).return_ok(None);

        let client = CustomerClient::new(mock.client());
        assert!(client.find_by_id(CustomerId(1)).await.unwrap().is_some());
        assert!(client.find_by_id(CustomerId(2)).await.unwrap().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CustomerError::ValidationError("invalid email: bob".to_string()),
            )));
        mock.expect_get(CustomerId(3))
            .return_err(FrameworkError::ActorClosed);

        let client = CustomerClient::new(mock.client());
        let params = CustomerCreate {
            name: "Bob".to_string(),
            email: "bob".to_string(),
        };
        assert_eq!(
            client.create_customer(params).await,
            Err(CustomerError::ValidationError(
                "invalid email: bob".to_string()
            ))
        );
        assert!(matches!(
            client.find_by_id(CustomerId(3)).await,
            Err(CustomerError::ActorCommunicationError(_))
        ));
        mock.verify();
    }
}
