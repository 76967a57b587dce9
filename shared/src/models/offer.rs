//! Local supermarket discount offers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ItemId, OfferCategory};

/// A discounted product at a nearby store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: ItemId,
    pub product_name: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub discount_percentage: u8,
    pub store_name: String,
    pub expiration_date: NaiveDate,
    pub category: OfferCategory,
    pub unit: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub has_alert: bool,
    /// Distance to the store in kilometres
    pub distance: f64,
}

impl Offer {
    /// Absolute saving per unit
    pub fn saving(&self) -> f64 {
        self.original_price - self.discounted_price
    }
}
