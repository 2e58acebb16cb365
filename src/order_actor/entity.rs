//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are write-once: `Update` and `Action` are [`Infallible`], so no request can
//! modify a stored order. The only way out is `delete`, used to discard an order whose
//! stock write failed.

use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        for item in &params.line_items {
            let reason = if item.quantity == 0 {
                "zero quantity"
            } else if item.unit_price < Decimal::ZERO {
                "negative unit price"
            } else {
                continue;
            };
            return Err(OrderError::InvalidLineItem {
                product_id: item.product_id,
                reason,
            });
        }
        Ok(Self::new(id, params.customer_id, params.line_items))
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
