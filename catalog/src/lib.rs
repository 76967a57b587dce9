//! Catalog library for the sparkoch grocery-savings app
//!
//! Derives the visible lists of offers, recipes and stores from the source
//! records: free-text search, typed filters, sort keys, facet counts and
//! grouping. Also aggregates the shopping list and provides item sources.

pub mod core;
pub mod error;
pub mod items;
pub mod services;
pub mod shopping;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    compute_view, count_by_category, group_by_key, sort_groups_by, suggest, BareNumber, CatalogItem, DerivedView,
    FilterState, Group, ItemFilter, NumericRange, RawViewRequest, SearchHistory, SortKey, ViewRequest,
};
pub use error::{CatalogError, CatalogResult};
pub use items::{
    group_offers_by_store, set_price_alert, toggle_favorite, AlertTrigger, Favorite, NotificationMethod, OfferFacet,
    OfferFilter, OfferFilterKey, PriceAlert, RecipeFacet, RecipeFilter, RecipeFilterKey, StoreFacet, StoreFilter,
    StoreFilterKey,
};
pub use services::{JsonCatalog, SeedCatalog};
pub use shopping::{ListSection, ShoppingList, ShoppingTotals};
pub use traits::ItemSource;
