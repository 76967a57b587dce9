//! Typed filter state
//!
//! Each item kind declares a closed filter enum (one variant per filter
//! category). `FilterState` holds at most one filter per category and never
//! stores a multi-select category with no selected values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};

/// A filter category with its selected value(s) for one item kind
pub trait ItemFilter: Clone + fmt::Debug + PartialEq {
    type Item;
    type Key: 'static + Copy + Ord + fmt::Debug + fmt::Display + FromStr<Err = CatalogError>;
    type Facet: Clone + Ord + fmt::Debug + fmt::Display;

    /// Every filter category of this item kind
    const KEYS: &'static [Self::Key];

    fn key(&self) -> Self::Key;

    fn matches(&self, item: &Self::Item) -> bool;

    /// Number of selected values; zero means the category is inactive
    fn selection_len(&self) -> usize;

    /// Facet values `item` contributes to the counts of category `key`
    fn facets(key: Self::Key, item: &Self::Item) -> Vec<Self::Facet>;

    fn facet_key(facet: &Self::Facet) -> Self::Key;

    /// Filter for the facet's category after the user selects `facet`
    ///
    /// Multi-select categories toggle membership; single-value categories
    /// select the facet, or deselect it when it is already selected.
    fn select(current: Option<&Self>, facet: &Self::Facet) -> Option<Self>;

    /// Parse a boundary `category=value` pair
    fn parse(key: &str, value: &str) -> CatalogResult<Self>;
}

/// Active filter selections, keyed by category
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<F: ItemFilter> {
    entries: BTreeMap<F::Key, F>,
}

impl<F: ItemFilter> Default for FilterState<F> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<F: ItemFilter> FilterState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from filters; later filters replace earlier ones of the same category
    pub fn from_filters(filters: impl IntoIterator<Item = F>) -> Self {
        let mut state = Self::new();
        for filter in filters {
            state.insert(filter);
        }
        state
    }

    /// Parse `category=value` arguments
    pub fn parse_args<S: AsRef<str>>(args: &[S]) -> CatalogResult<Self> {
        let mut state = Self::new();
        for arg in args {
            let (key, value) = split_filter_arg(arg.as_ref())?;
            state.insert(F::parse(key, value)?);
        }
        Ok(state)
    }

    /// Set the filter for its category; an empty selection clears the category
    pub fn insert(&mut self, filter: F) {
        let key = filter.key();
        if filter.selection_len() == 0 {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, filter);
        }
    }

    pub fn remove(&mut self, key: F::Key) -> Option<F> {
        self.entries.remove(&key)
    }

    /// Apply a chip click for `facet`
    pub fn toggle(&mut self, facet: &F::Facet) {
        let key = F::facet_key(facet);
        match F::select(self.entries.get(&key), facet) {
            Some(filter) => self.insert(filter),
            None => {
                self.entries.remove(&key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, key: F::Key) -> Option<&F> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: F::Key) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of categories with an active selection
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Badge count: each multi-select value counts once, other categories once
    pub fn active_count(&self) -> usize {
        self.entries.values().map(ItemFilter::selection_len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.entries.values()
    }

    /// True when `item` satisfies every active category
    pub fn matches(&self, item: &F::Item) -> bool {
        self.entries.values().all(|filter| filter.matches(item))
    }

    /// True when `item` satisfies every active category other than `key`
    pub fn matches_except(&self, item: &F::Item, key: F::Key) -> bool {
        self.entries
            .iter()
            .filter(|(entry_key, _)| **entry_key != key)
            .all(|(_, filter)| filter.matches(item))
    }
}

/// Split `category=value` at the first `=`
pub fn split_filter_arg(arg: &str) -> CatalogResult<(&str, &str)> {
    arg.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| CatalogError::invalid_filter(arg, "", "expected category=value"))
}

/// Split a comma-separated multi-select value, dropping blanks
pub fn split_values(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|part| !part.is_empty())
}
