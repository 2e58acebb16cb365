//! # Order Desk demo
//!
//! Starts the [`OrderSystem`], seeds one customer and two products, then places one order
//! that succeeds and one that names an unknown product. Set `RUST_LOG=debug` to follow the
//! requests through the actors.

use actor_framework::tracing::setup_tracing;
use order_desk::config::SystemConfig;
use order_desk::create_order::{OrderItemRequest, OrderRequest};
use order_desk::lifecycle::OrderSystem;
use order_desk::model::{CustomerCreate, ProductCreate, ProductId};
use rust_decimal::Decimal;
use std::num::NonZeroU32;
use tracing::{error, info, Instrument};

fn line(product_id: ProductId, quantity: u32) -> Result<OrderItemRequest, String> {
    let quantity = NonZeroU32::new(quantity).ok_or("quantity must be positive")?;
    Ok(OrderItemRequest::new(product_id, quantity))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    let system = OrderSystem::from_config(&config);

    let span = tracing::info_span!("seeding");
    let (customer, keyboard, cable) = async {
        let customer = system
            .customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await?;
        let keyboard = system
            .product_client
            .create_product(ProductCreate {
                name: "Keyboard".to_string(),
                price: Decimal::new(500, 2),
                quantity: 10,
            })
            .await?;
        let cable = system
            .product_client
            .create_product(ProductCreate {
                name: "Cable".to_string(),
                price: Decimal::new(300, 2),
                quantity: 2,
            })
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((customer, keyboard, cable))
    }
    .instrument(span)
    .await?;
    info!(customer_id = %customer.id, "Catalog seeded");

    let create_order = system.create_order();

    let request = OrderRequest::new(
        customer.id,
        vec![line(keyboard.id, 3)?, line(cable.id, 1)?],
    );
    match create_order.execute(request).await {
        Ok(order) => info!(order_id = %order.id, total = %order.total(), "Order placed"),
        Err(e) => error!(error = %e, "Order failed"),
    }

    let unknown = ProductId(99);
    let request = OrderRequest::new(customer.id, vec![line(keyboard.id, 3)?, line(unknown, 1)?]);
    match create_order.execute(request).await {
        Ok(order) => error!(order_id = %order.id, "Order with unknown product was accepted"),
        Err(e) => info!(error = %e, "Order rejected as expected"),
    }

    let keyboard_stock = system.product_client.check_stock(keyboard.id).await?;
    let cable_stock = system.product_client.check_stock(cable.id).await?;
    info!(keyboard = keyboard_stock, cable = cable_stock, "Stock after orders");

    drop(create_order);
    system.shutdown().await?;
    Ok(())
}
