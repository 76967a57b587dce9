use serde::{Deserialize, Serialize};

use crate::types::{ItemId, ShoppingCategory};

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub quantity: u32,
    pub unit: String,
    pub price: f64,
    pub original_price: f64,
    #[serde(default)]
    pub category: ShoppingCategory,
    pub store: String,
    #[serde(default)]
    pub has_offer: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub note: Option<String>,
}

impl ShoppingItem {
    pub fn line_cost(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn line_original_cost(&self) -> f64 {
        self.original_price * f64::from(self.quantity)
    }
}
