//! File-backed item source
//!
//! Reads one JSON array per record kind from a data directory. A missing
//! file is an empty collection; a malformed one is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use shared::{component_debug, Component, Offer, Recipe, ShoppingItem, Store};

use crate::error::CatalogResult;
use crate::traits::ItemSource;

pub const OFFERS_FILE: &str = "offers.json";
pub const RECIPES_FILE: &str = "recipes.json";
pub const STORES_FILE: &str = "stores.json";
pub const SHOPPING_LIST_FILE: &str = "shopping_list.json";

#[derive(Debug, Clone)]
pub struct JsonCatalog {
    data_dir: PathBuf,
}

impl JsonCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load<T: DeserializeOwned>(&self, file_name: &str) -> CatalogResult<Vec<T>> {
        let path = self.data_dir.join(file_name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                component_debug!(Component::Catalog, path = %path.display(), "Data file missing, using empty collection");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let records: Vec<T> = serde_json::from_str(&content)?;
        component_debug!(Component::Catalog, path = %path.display(), records = records.len(), "Loaded data file");
        Ok(records)
    }
}

impl ItemSource for JsonCatalog {
    fn offers(&self) -> CatalogResult<Vec<Offer>> {
        self.load(OFFERS_FILE)
    }

    fn recipes(&self) -> CatalogResult<Vec<Recipe>> {
        self.load(RECIPES_FILE)
    }

    fn stores(&self) -> CatalogResult<Vec<Store>> {
        self.load(STORES_FILE)
    }

    fn shopping_items(&self) -> CatalogResult<Vec<ShoppingItem>> {
        self.load(SHOPPING_LIST_FILE)
    }
}
