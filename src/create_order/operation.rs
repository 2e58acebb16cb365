//! The order creation pipeline.
use super::error::{CreateOrderError, Shortfall};
use super::ports::{CustomerDirectory, OrderStore, ProductCatalog};
use super::request::OrderRequest;
use crate::model::{Order, OrderId, OrderLineItem, Product, ProductId, StockUpdate};
use crate::product_actor::ProductError;
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

/// Products returned by the single catalog lookup, by id.
type Snapshot = HashMap<ProductId, Product>;

/// Creates orders against a customer directory, a product catalog and an order store.
///
/// `execute` runs one strictly sequential pipeline:
///
/// 1. resolve the customer (`InvalidCustomer`)
/// 2. look up all requested products in one call
/// 3. every requested product exists (`InvalidProduct`)
/// 4. every line fits the stock seen in step 2 (`InsufficientQuantity`)
/// 5. price the lines from that snapshot
/// 6. persist the order
/// 7. write `snapshot - requested` back as compare-and-set stock updates
///
/// Steps 1-5 write nothing. Step 7 is a separate call: if it fails, the order from step 6
/// is discarded again and the call fails with `StockUpdateFailed`.
#[derive(Clone)]
pub struct CreateOrder<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrder<C, P, O>
where
    C: CustomerDirectory,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    #[instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.items.len())
    )]
    pub async fn execute(&self, request: OrderRequest) -> Result<Order, CreateOrderError> {
        let customer = match self.customers.find_by_id(request.customer_id).await? {
            Some(customer) => customer,
            None => {
                warn!("Unknown customer");
                return Err(CreateOrderError::InvalidCustomer(request.customer_id));
            }
        };

        let snapshot: Snapshot = self
            .products
            .find_all_by_id(request.product_ids())
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();
        debug!(found = snapshot.len(), "Catalog snapshot taken");

        check_existence(&request, &snapshot).inspect_err(|e| warn!(error = %e, "Rejected"))?;
        check_availability(&request, &snapshot).inspect_err(|e| warn!(error = %e, "Rejected"))?;

        let line_items = price_lines(&request, &snapshot);
        let stock_updates = stock_updates(&request, &snapshot);

        let order = self.orders.create(&customer, line_items).await?;
        info!(order_id = %order.id, total = %order.total(), "Order persisted");

        if let Err(reason) = self.products.update_quantity(stock_updates).await {
            return Err(self.compensate(order.id, reason).await);
        }

        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    async fn compensate(&self, order_id: OrderId, reason: ProductError) -> CreateOrderError {
        warn!(%order_id, error = %reason, "Stock update failed, discarding order");
        let compensated = match self.orders.discard(order_id).await {
            Ok(()) => true,
            Err(e) => {
                error!(%order_id, error = %e, "Order persisted without stock update");
                false
            }
        };
        CreateOrderError::StockUpdateFailed {
            order_id,
            compensated,
            reason,
        }
    }
}

fn check_existence(request: &OrderRequest, snapshot: &Snapshot) -> Result<(), CreateOrderError> {
    let missing: Vec<ProductId> = request
        .items
        .iter()
        .map(|item| item.product_id)
        .filter(|id| !snapshot.contains_key(id))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CreateOrderError::InvalidProduct(missing))
    }
}

// Runs after check_existence, so every lookup hits.
fn check_availability(request: &OrderRequest, snapshot: &Snapshot) -> Result<(), CreateOrderError> {
    let short: Vec<Shortfall> = request
        .items
        .iter()
        .filter_map(|item| {
            let available = snapshot.get(&item.product_id)?.quantity;
            let requested = item.quantity.get();
            (requested > available).then_some(Shortfall {
                product_id: item.product_id,
                requested,
                available,
            })
        })
        .collect();
    if short.is_empty() {
        Ok(())
    } else {
        Err(CreateOrderError::InsufficientQuantity(short))
    }
}

fn price_lines(request: &OrderRequest, snapshot: &Snapshot) -> Vec<OrderLineItem> {
    request
        .items
        .iter()
        .filter_map(|item| {
            let product = snapshot.get(&item.product_id)?;
            Some(OrderLineItem {
                product_id: item.product_id,
                unit_price: product.price,
                quantity: item.quantity.get(),
            })
        })
        .collect()
}

/// One update per product. Each line computes `snapshot - requested` on its own, so
/// for a repeated product the last line wins.
fn stock_updates(request: &OrderRequest, snapshot: &Snapshot) -> Vec<StockUpdate> {
    let mut updates: Vec<StockUpdate> = Vec::new();
    for item in &request.items {
        let Some(product) = snapshot.get(&item.product_id) else {
            continue;
        };
        let update = StockUpdate {
            product_id: item.product_id,
            expected: product.quantity,
            quantity: product.quantity.saturating_sub(item.quantity.get()),
        };
        match updates.iter_mut().find(|u| u.product_id == item.product_id) {
            Some(existing) => *existing = update,
            None => updates.push(update),
        }
    }
    updates
}
