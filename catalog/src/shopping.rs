//! Shopping list aggregation

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared::{component_debug, Component, ItemId, ShoppingItem};

use crate::core::grouping::group_by_key;
use crate::error::{CatalogError, CatalogResult};

/// Cost summary of a set of list entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingTotals {
    pub cost: f64,
    pub original_cost: f64,
    pub savings: f64,
}

impl ShoppingTotals {
    pub fn of<'a>(items: impl IntoIterator<Item = &'a ShoppingItem>) -> Self {
        let (cost, original_cost) = items.into_iter().fold((0.0, 0.0), |(cost, original), item| {
            (cost + item.line_cost(), original + item.line_original_cost())
        });
        Self {
            cost,
            original_cost,
            savings: original_cost - cost,
        }
    }
}

/// One section of the grouped list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListSection<'a> {
    pub title: String,
    pub items: Vec<&'a ShoppingItem>,
    pub totals: ShoppingTotals,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> CatalogResult<&mut ShoppingItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound { id })
    }

    /// One past the largest id; the lowest unused id once `u32::MAX` is taken
    fn next_id(&self) -> CatalogResult<ItemId> {
        let Some(max) = self.items.iter().map(|item| item.id).max() else {
            return Ok(ItemId(1));
        };
        if let Some(id) = max.checked_next() {
            return Ok(id);
        }
        let used: BTreeSet<ItemId> = self.items.iter().map(|item| item.id).collect();
        (1..=u32::MAX)
            .map(ItemId)
            .find(|id| !used.contains(id))
            .ok_or(CatalogError::IdsExhausted)
    }

    /// Append `item` under a fresh id and return that id
    pub fn add(&mut self, mut item: ShoppingItem) -> CatalogResult<ItemId> {
        if item.quantity == 0 {
            return Err(CatalogError::InvalidQuantity { quantity: 0 });
        }
        item.id = self.next_id()?;
        let id = item.id;
        component_debug!(Component::Catalog, item_id = %id, name = %item.name, "Added shopping list item");
        self.items.push(item);
        Ok(id)
    }

    pub fn remove(&mut self, id: ItemId) -> CatalogResult<ShoppingItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound { id })?;
        Ok(self.items.remove(position))
    }

    /// Flip the completed flag; returns the new state
    pub fn toggle_complete(&mut self, id: ItemId) -> CatalogResult<bool> {
        let item = self.get_mut(id)?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) -> CatalogResult<()> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity { quantity });
        }
        self.get_mut(id)?.quantity = quantity;
        Ok(())
    }

    /// Reopen everything when all entries are done, otherwise complete everything
    pub fn toggle_all(&mut self) {
        let all_completed = self.items.iter().all(|item| item.completed);
        for item in &mut self.items {
            item.completed = !all_completed;
        }
    }

    /// Drop completed entries and return how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    pub fn active(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|item| !item.completed)
    }

    pub fn completed(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|item| item.completed)
    }

    pub fn totals(&self) -> ShoppingTotals {
        ShoppingTotals::of(&self.items)
    }

    /// Sections per store, in first-seen order
    pub fn by_store(&self) -> Vec<ListSection<'_>> {
        group_by_key(&self.items, |item| item.store.clone())
            .into_iter()
            .map(|group| ListSection {
                totals: ShoppingTotals::of(group.items.iter().copied()),
                title: group.key,
                items: group.items,
            })
            .collect()
    }

    /// Sections per category, titled with the category's display name
    pub fn by_category(&self) -> Vec<ListSection<'_>> {
        group_by_key(&self.items, |item| item.category)
            .into_iter()
            .map(|group| ListSection {
                title: group.key.display_name().to_string(),
                totals: ShoppingTotals::of(group.items.iter().copied()),
                items: group.items,
            })
            .collect()
    }

    /// Plain-text list for sharing, one line per entry
    pub fn export_text(&self) -> String {
        self.items
            .iter()
            .map(|item| match &item.brand {
                Some(brand) => format!("{} {} {} ({})", item.quantity, item.unit, item.name, brand),
                None => format!("{} {} {}", item.quantity, item.unit, item.name),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
