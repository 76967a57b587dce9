//! Shared types for the sparkoch grocery-savings workspace
//!
//! Contains the catalog records, closed enumerations, configuration,
//! error types and logging helpers used by every other crate.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod types;

pub use config::{AppConfig, ParsePolicy};
pub use errors::*;
pub use models::{Offer, Recipe, ShoppingItem, Store};
pub use types::*;
