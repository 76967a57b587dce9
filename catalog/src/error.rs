//! Catalog-specific error types

use shared::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid sort key: {key}")]
    InvalidSortKey { key: String },

    #[error("Sort key {key} is not available for {domain}")]
    UnsupportedSortKey { key: String, domain: String },

    #[error("Invalid value for filter {category}: {value:?} ({reason})")]
    InvalidFilterValue {
        category: String,
        value: String,
        reason: String,
    },

    #[error("Unknown filter category for {domain}: {category}")]
    UnknownFilterCategory { category: String, domain: String },

    #[error("Quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: u32 },

    #[error("No item with id {id}")]
    ItemNotFound { id: ItemId },

    #[error("Item source failed: {message}")]
    DataSource { message: String },

    #[error("No free item id left")]
    IdsExhausted,

    #[error("Alert price must be a positive amount, got {price}")]
    InvalidAlertPrice { price: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn invalid_filter(category: impl Into<String>, value: impl Into<String>, reason: impl ToString) -> Self {
        CatalogError::InvalidFilterValue {
            category: category.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
