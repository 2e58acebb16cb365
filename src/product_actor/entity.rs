//! [`ActorEntity`] implementation for [`Product`].
//!
//! Includes the stock actions; see [`ProductAction`] for their contracts.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn validate_price(price: Decimal) -> Result<(), ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::NegativePrice(price));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_price(params.price)?;
        Ok(Self::new(id, params.name, params.price, params.quantity))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: Product name
    /// - `price`: Unit price
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::Restock(added) => {
                let restocked = self
                    .quantity
                    .checked_add(added)
                    .ok_or(ProductError::StockOverflow {
                        product_id: self.id,
                        quantity: self.quantity,
                        added,
                    })?;
                self.quantity = restocked;
                Ok(ProductActionResult::Restock(self.quantity))
            }
            ProductAction::SetQuantity { expected, quantity } => {
                if self.quantity != expected {
                    return Err(ProductError::StockConflict {
                        product_id: self.id,
                        expected,
                        actual: self.quantity,
                    });
                }
                self.quantity = quantity;
                Ok(ProductActionResult::SetQuantity(self.quantity))
            }
        }
    }
}
