//! Catalog trait definitions for dependency injection

use shared::{Offer, Recipe, ShoppingItem, Store};

use crate::error::CatalogResult;

/// Source of the records the engine works on
#[mockall::automock]
pub trait ItemSource: Send + Sync {
    /// Current discount offers
    fn offers(&self) -> CatalogResult<Vec<Offer>>;

    /// Recipe catalogue
    fn recipes(&self) -> CatalogResult<Vec<Recipe>>;

    /// Nearby stores
    fn stores(&self) -> CatalogResult<Vec<Store>>;

    /// Entries of the user's shopping list
    fn shopping_items(&self) -> CatalogResult<Vec<ShoppingItem>>;
}
