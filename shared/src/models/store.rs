use serde::{Deserialize, Serialize};

use crate::types::{ItemId, StoreChain};

/// A supermarket branch shown on the store locator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: ItemId,
    pub name: String,
    pub chain: StoreChain,
    pub address: String,
    pub distance: f64,
    pub is_open: bool,
    /// Number of active offers
    pub offers: u32,
    #[serde(default)]
    pub services: Vec<String>,
}
