//! Catalog records
//!
//! Plain data exchanged between item sources, the filter/sort engine and the
//! front end. The engine only ever reads these.

pub mod offer;
pub mod recipe;
pub mod shopping;
pub mod store;

pub use offer::Offer;
pub use recipe::Recipe;
pub use shopping::ShoppingItem;
pub use store::Store;
