//! # Product Client
//!
//! High-level API for the `Product` actor; also the [`ProductCatalog`] used by order
//! creation.
use crate::create_order::ProductCatalog;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, StockUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

fn mismatched(action: &str, result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("{action} answered with {result:?}"))
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Current stock level of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(mismatched("CheckStock", other)),
        }
    }

    /// Adds `units` to the stock and returns the new level.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, units: u32) -> Result<u32, ProductError> {
        debug!("Restocking");
        match self
            .inner
            .perform_action(id, ProductAction::Restock(units))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Restock(level) => Ok(level),
            other => Err(mismatched("Restock", other)),
        }
    }

    /// Compare-and-set of several stock levels in one all-or-nothing batch.
    #[instrument(skip(self))]
    pub async fn set_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError> {
        if updates.is_empty() {
            return Ok(());
        }
        debug!(count = updates.len(), "Writing stock");
        let actions = updates
            .into_iter()
            .map(|update| {
                (
                    update.product_id,
                    ProductAction::SetQuantity {
                        expected: update.expected,
                        quantity: update.quantity,
                    },
                )
            })
            .collect();
        self.inner
            .perform_batch(actions)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    async fn find_all_by_id(&self, ids: Vec<ProductId>) -> Result<Vec<Product>, ProductError> {
        self.get_many(ids).await
    }

    async fn update_quantity(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError> {
        self.set_quantities(updates).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_batch, MockClient};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::CheckStock(42));

        let client = ProductClient::new(mock.client());
        assert_eq!(client.check_stock(ProductId(1)).await.unwrap(), 42);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_action_result_is_an_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::Restock(3));

        let client = ProductClient::new(mock.client());
        assert!(matches!(
            client.check_stock(ProductId(1)).await,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_set_quantities_sends_one_batch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let write_task = tokio::spawn(async move {
            product_client
                .set_quantities(vec![
                    StockUpdate {
                        product_id: ProductId(1),
                        expected: 10,
                        quantity: 7,
                    },
                    StockUpdate {
                        product_id: ProductId(2),
                        expected: 2,
                        quantity: 1,
                    },
                ])
                .await
        });

        let (actions, responder) = expect_batch(&mut receiver)
            .await
            .expect("Expected Batch request");
        assert_eq!(
            actions,
            vec![
                (
                    ProductId(1),
                    ProductAction::SetQuantity {
                        expected: 10,
                        quantity: 7
                    }
                ),
                (
                    ProductId(2),
                    ProductAction::SetQuantity {
                        expected: 2,
                        quantity: 1
                    }
                ),
            ]
        );
        responder
            .send(Ok(vec![
                ProductActionResult::SetQuantity(7),
                ProductActionResult::SetQuantity(1),
            ]))
            .unwrap();

        assert!(write_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_set_quantities_skips_empty_batch() {
        let mock = MockClient::<Product>::new();
        let client = ProductClient::new(mock.client());
        client.set_quantities(vec![]).await.unwrap();
        assert!(mock.take_received().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_stock_conflict_comes_back_typed() {
        let conflict = ProductError::StockConflict {
            product_id: ProductId(1),
            expected: 10,
            actual: 8,
        };
        let mut mock = MockClient::<Product>::new();
        mock.expect_batch()
            .return_err(FrameworkError::EntityError(Box::new(conflict.clone())));

        let client = ProductClient::new(mock.client());
        let update = StockUpdate {
            product_id: ProductId(1),
            expected: 10,
            quantity: 7,
        };
        assert_eq!(client.update_quantity(vec![update]).await, Err(conflict));
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_all_by_id_uses_get_many() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get_many(vec![ProductId(1), ProductId(3)])
            .return_ok(vec![Product::new(ProductId(1), "Widget", dec!(5.00), 10)]);

        let client = ProductClient::new(mock.client());
        let found = client
            .find_all_by_id(vec![ProductId(1), ProductId(3)])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ProductId(1));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(5))
            .return_err(FrameworkError::NotFound("product_5".to_string()));

        let client = ProductClient::new(mock.client());
        assert_eq!(
            client.restock(ProductId(5), 1).await,
            Err(ProductError::NotFound("product_5".to_string()))
        );
    }
}
