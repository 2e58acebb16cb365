//! Custom actions for the Product actor.
//!
//! Stock never changes through `ProductUpdate`; every movement is one of these actions,
//! handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! in [`entity`](super::entity).

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds units to the stock.
    ///
    /// # Errors
    /// Fails with `StockOverflow` if the new level does not fit in a `u32`.
    Restock(u32),
    /// Overwrites the stock with `quantity` if it still equals `expected`.
    ///
    /// # Errors
    /// Fails with `StockConflict` when another writer changed the stock first.
    SetQuantity { expected: u32, quantity: u32 },
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
/// Each carries the stock level after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    Restock(u32),
    SetQuantity(u32),
}
