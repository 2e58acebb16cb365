//! `CreateOrder` against mocked collaborators.
//!
//! Every collaborator is a real client whose actor is a `MockClient`, so these tests pin
//! down exactly which requests the operation sends, in which order, and what it does with
//! each answer.

use actor_framework::mock::{MockClient, Received};
use actor_framework::FrameworkError;
use order_desk::clients::{CustomerClient, OrderClient, ProductClient};
use order_desk::create_order::{
    CreateOrder, CreateOrderError, OrderItemRequest, OrderRequest, Shortfall,
};
use order_desk::customer_actor::CustomerError;
use order_desk::model::{
    Customer, CustomerId, Order, OrderId, OrderLineItem, Product, ProductId,
};
use order_desk::order_actor::OrderError;
use order_desk::product_actor::{ProductAction, ProductActionResult, ProductError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::num::NonZeroU32;

const C1: CustomerId = CustomerId(1);
const P1: ProductId = ProductId(1);
const P2: ProductId = ProductId(2);
const P3: ProductId = ProductId(3);

struct Mocks {
    customers: MockClient<Customer>,
    products: MockClient<Product>,
    orders: MockClient<Order>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            customers: MockClient::new(),
            products: MockClient::new(),
            orders: MockClient::new(),
        }
    }

    fn operation(&self) -> CreateOrder<CustomerClient, ProductClient, OrderClient> {
        CreateOrder::new(
            CustomerClient::new(self.customers.client()),
            ProductClient::new(self.products.client()),
            OrderClient::new(self.orders.client()),
        )
    }

    fn expect_known_customer(&mut self) {
        self.customers
            .expect_get(C1)
            .return_ok(Some(Customer::new(C1, "Alice", "alice@example.com")));
    }

    fn verify(&self) {
        self.customers.verify();
        self.products.verify();
        self.orders.verify();
    }
}

fn line(product_id: ProductId, quantity: u32) -> OrderItemRequest {
    OrderItemRequest::new(product_id, NonZeroU32::new(quantity).unwrap())
}

fn product(id: ProductId, price: Decimal, quantity: u32) -> Product {
    Product::new(id, format!("Product {}", id.0), price, quantity)
}

fn item(product_id: ProductId, unit_price: Decimal, quantity: u32) -> OrderLineItem {
    OrderLineItem {
        product_id,
        unit_price,
        quantity,
    }
}

fn set_quantity(expected: u32, quantity: u32) -> ProductAction {
    ProductAction::SetQuantity { expected, quantity }
}

#[tokio::test]
async fn test_valid_order_is_priced_persisted_and_decremented() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks.products.expect_get_many(vec![P1, P2]).return_ok(vec![
        product(P1, dec!(5.00), 10),
        product(P2, dec!(3.00), 2),
    ]);
    let expected_items = vec![item(P1, dec!(5.00), 3), item(P2, dec!(3.00), 1)];
    mocks
        .orders
        .expect_create()
        .return_ok(Order::new(OrderId(1), C1, expected_items.clone()));
    mocks.products.expect_batch().return_ok(vec![
        ProductActionResult::SetQuantity(7),
        ProductActionResult::SetQuantity(1),
    ]);

    let request = OrderRequest::new(C1, vec![line(P1, 3), line(P2, 1)]);
    let order = mocks.operation().execute(request).await.unwrap();

    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.line_items, expected_items);
    assert_eq!(order.total(), dec!(18.00));

    match mocks.orders.take_received().as_slice() {
        [Received::Create(params)] => {
            assert_eq!(params.customer_id, C1);
            assert_eq!(params.line_items, expected_items);
        }
        other => panic!("Expected one Create, got {other:?}"),
    }
    match mocks.products.take_received().as_slice() {
        [Received::GetMany(ids), Received::Batch(actions)] => {
            assert_eq!(ids, &vec![P1, P2]);
            assert_eq!(
                actions,
                &vec![(P1, set_quantity(10, 7)), (P2, set_quantity(2, 1))]
            );
        }
        other => panic!("Expected GetMany then Batch, got {other:?}"),
    }
    mocks.verify();
}

#[tokio::test]
async fn test_unknown_customer_touches_nothing_else() {
    let mut mocks = Mocks::new();
    mocks.customers.expect_get(CustomerId(42)).return_ok(None);

    let request = OrderRequest::new(CustomerId(42), vec![line(P1, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(err, CreateOrderError::InvalidCustomer(CustomerId(42)));
    assert!(mocks.products.take_received().is_empty());
    assert!(mocks.orders.take_received().is_empty());
    mocks.verify();
}

#[tokio::test]
async fn test_missing_product_is_named_and_nothing_is_written() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P1, P2])
        .return_ok(vec![product(P1, dec!(5.00), 10)]);

    let request = OrderRequest::new(C1, vec![line(P1, 1), line(P2, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(err, CreateOrderError::InvalidProduct(vec![P2]));
    assert!(err.to_string().contains("product_2"));
    assert!(mocks.orders.take_received().is_empty());
    mocks.verify();
}

#[tokio::test]
async fn test_every_missing_product_is_listed_in_request_order() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P3, P1, P2])
        .return_ok(vec![product(P1, dec!(5.00), 10)]);

    let request = OrderRequest::new(C1, vec![line(P3, 1), line(P1, 1), line(P2, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(err, CreateOrderError::InvalidProduct(vec![P3, P2]));
    mocks.verify();
}

#[tokio::test]
async fn test_insufficient_quantity_names_product_and_requested_amount() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P1])
        .return_ok(vec![product(P1, dec!(5.00), 5)]);

    let request = OrderRequest::new(C1, vec![line(P1, 10)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(
        err,
        CreateOrderError::InsufficientQuantity(vec![Shortfall {
            product_id: P1,
            requested: 10,
            available: 5,
        }])
    );
    let message = err.to_string();
    assert!(message.contains("product_1") && message.contains("10"));
    assert!(mocks.orders.take_received().is_empty());
    mocks.verify();
}

#[tokio::test]
async fn test_every_shortfall_is_listed() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks.products.expect_get_many(vec![P1, P2, P3]).return_ok(vec![
        product(P1, dec!(5.00), 1),
        product(P2, dec!(3.00), 2),
        product(P3, dec!(1.00), 0),
    ]);

    let request = OrderRequest::new(C1, vec![line(P1, 2), line(P2, 2), line(P3, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(
        err,
        CreateOrderError::InsufficientQuantity(vec![
            Shortfall {
                product_id: P1,
                requested: 2,
                available: 1,
            },
            Shortfall {
                product_id: P3,
                requested: 1,
                available: 0,
            },
        ])
    );
    mocks.verify();
}

#[tokio::test]
async fn test_missing_product_is_reported_before_shortfalls() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P1, P2])
        .return_ok(vec![product(P1, dec!(5.00), 0)]);

    let request = OrderRequest::new(C1, vec![line(P1, 5), line(P2, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(err, CreateOrderError::InvalidProduct(vec![P2]));
    mocks.verify();
}

#[tokio::test]
async fn test_same_invalid_request_fails_the_same_way_twice() {
    let mut mocks = Mocks::new();
    for _ in 0..2 {
        mocks.expect_known_customer();
        mocks.products.expect_get_many(vec![P1, P3]).return_ok(vec![product(
            P1,
            dec!(5.00),
            10,
        )]);
    }

    let operation = mocks.operation();
    let request = OrderRequest::new(C1, vec![line(P1, 3), line(P3, 1)]);
    let first = operation.execute(request.clone()).await.unwrap_err();
    let second = operation.execute(request).await.unwrap_err();

    assert_eq!(first, second);
    assert!(matches!(first, CreateOrderError::InvalidProduct(_)));
    mocks.verify();
}

#[tokio::test]
async fn test_duplicate_lines_are_priced_separately_and_last_line_sets_stock() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P1])
        .return_ok(vec![product(P1, dec!(5.00), 10)]);
    let items = vec![item(P1, dec!(5.00), 3), item(P1, dec!(5.00), 4)];
    mocks
        .orders
        .expect_create()
        .return_ok(Order::new(OrderId(1), C1, items.clone()));
    mocks
        .products
        .expect_batch()
        .return_ok(vec![ProductActionResult::SetQuantity(6)]);

    let request = OrderRequest::new(C1, vec![line(P1, 3), line(P1, 4)]);
    let order = mocks.operation().execute(request).await.unwrap();
    assert_eq!(order.line_items, items);

    match mocks.products.take_received().as_slice() {
        [Received::GetMany(_), Received::Batch(actions)] => {
            assert_eq!(actions, &vec![(P1, set_quantity(10, 6))]);
        }
        other => panic!("Expected GetMany then Batch, got {other:?}"),
    }
    mocks.verify();
}

#[tokio::test]
async fn test_failed_stock_write_discards_the_order() {
    let conflict = ProductError::StockConflict {
        product_id: P1,
        expected: 10,
        actual: 8,
    };
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P1])
        .return_ok(vec![product(P1, dec!(5.00), 10)]);
    mocks.orders.expect_create().return_ok(Order::new(
        OrderId(7),
        C1,
        vec![item(P1, dec!(5.00), 3)],
    ));
    mocks
        .products
        .expect_batch()
        .return_err(FrameworkError::EntityError(Box::new(conflict.clone())));
    mocks.orders.expect_delete(OrderId(7)).return_ok(());

    let request = OrderRequest::new(C1, vec![line(P1, 3)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(
        err,
        CreateOrderError::StockUpdateFailed {
            order_id: OrderId(7),
            compensated: true,
            reason: conflict,
        }
    );
    mocks.verify();
}

#[tokio::test]
async fn test_failed_discard_leaves_the_order_flagged() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P1])
        .return_ok(vec![product(P1, dec!(5.00), 10)]);
    mocks.orders.expect_create().return_ok(Order::new(
        OrderId(8),
        C1,
        vec![item(P1, dec!(5.00), 1)],
    ));
    mocks
        .products
        .expect_batch()
        .return_err(FrameworkError::ActorClosed);
    mocks
        .orders
        .expect_delete(OrderId(8))
        .return_err(FrameworkError::ActorClosed);

    let request = OrderRequest::new(C1, vec![line(P1, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    match err {
        CreateOrderError::StockUpdateFailed {
            order_id,
            compensated,
            reason,
        } => {
            assert_eq!(order_id, OrderId(8));
            assert!(!compensated);
            assert!(matches!(reason, ProductError::ActorCommunicationError(_)));
        }
        other => panic!("Expected StockUpdateFailed, got {other:?}"),
    }
    mocks.verify();
}

#[tokio::test]
async fn test_collaborator_failures_pass_through() {
    let mut mocks = Mocks::new();
    mocks
        .customers
        .expect_get(C1)
        .return_err(FrameworkError::ActorDropped);

    let request = OrderRequest::new(C1, vec![line(P1, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();
    assert!(matches!(
        err,
        CreateOrderError::Customers(CustomerError::ActorCommunicationError(_))
    ));
    mocks.verify();
}

#[tokio::test]
async fn test_rejected_persist_skips_stock_write() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks
        .products
        .expect_get_many(vec![P1])
        .return_ok(vec![product(P1, dec!(5.00), 10)]);
    mocks
        .orders
        .expect_create()
        .return_err(FrameworkError::EntityError(Box::new(
            OrderError::InvalidLineItem {
                product_id: P1,
                reason: "zero quantity",
            },
        )));

    let request = OrderRequest::new(C1, vec![line(P1, 1)]);
    let err = mocks.operation().execute(request).await.unwrap_err();

    assert_eq!(
        err,
        CreateOrderError::Orders(OrderError::InvalidLineItem {
            product_id: P1,
            reason: "zero quantity",
        })
    );
    match mocks.products.take_received().as_slice() {
        [Received::GetMany(_)] => {}
        other => panic!("Expected only GetMany, got {other:?}"),
    }
    mocks.verify();
}

#[tokio::test]
async fn test_empty_request_creates_an_empty_order() {
    let mut mocks = Mocks::new();
    mocks.expect_known_customer();
    mocks.products.expect_get_many(vec![]).return_ok(vec![]);
    mocks
        .orders
        .expect_create()
        .return_ok(Order::new(OrderId(1), C1, vec![]));

    let order = mocks
        .operation()
        .execute(OrderRequest::new(C1, vec![]))
        .await
        .unwrap();

    assert!(order.line_items.is_empty());
    assert_eq!(order.total(), Decimal::ZERO);
    mocks.verify();
}
