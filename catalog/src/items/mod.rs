//! Item kinds served by the engine

pub mod marks;
pub mod offers;
pub mod recipes;
pub mod stores;

pub use marks::{set_price_alert, toggle_favorite, AlertTrigger, Favorite, NotificationMethod, PriceAlert};
pub use offers::{group_offers_by_store, OfferFacet, OfferFilter, OfferFilterKey};
pub use recipes::{RecipeFacet, RecipeFilter, RecipeFilterKey};
pub use stores::{StoreFacet, StoreFilter, StoreFilterKey};
