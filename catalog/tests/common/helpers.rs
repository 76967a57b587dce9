//! Test helpers for catalog tests

use catalog::{CatalogItem, DerivedView, FilterState, ItemFilter};
use shared::ItemId;

pub struct TestHelpers;

impl TestHelpers {
    /// Ids of a derived view as plain numbers
    pub fn ids<T: CatalogItem>(view: &DerivedView<'_, T>) -> Vec<u32> {
        view.ids().into_iter().map(|ItemId(id)| id).collect()
    }

    /// Filter state parsed from `category=value` pairs
    pub fn filters<F: ItemFilter>(args: &[&str]) -> FilterState<F> {
        FilterState::parse_args(args).unwrap()
    }
}
