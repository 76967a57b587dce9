//! Search, filter and sort pipeline
//!
//! `compute_view` is a pure function of its inputs: it borrows the source
//! items, never mutates them, and returns the derived ordering as references.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::{component_debug, Component, ItemId, ParsePolicy};

use super::filter::{FilterState, ItemFilter};
use super::sort::{compare_metric, SortField, SortKey};
use crate::error::{CatalogError, CatalogResult};

/// A record the engine can search, filter and sort
pub trait CatalogItem {
    type Filter: ItemFilter<Item = Self>;

    /// Human-readable name of the item kind, used in errors
    const DOMAIN: &'static str;

    /// Comparator fields this item kind provides a metric for
    const SORT_FIELDS: &'static [SortField];

    fn id(&self) -> ItemId;

    /// Attributes matched by free-text search
    fn searchable_fields(&self) -> Vec<&str>;

    /// Metric for `field`; `None` for fields outside `SORT_FIELDS`
    fn sort_metric(&self, field: SortField) -> Option<f64>;
}

/// True when the lowercase `needle` occurs in any searchable attribute
pub fn matches_query<T: CatalogItem>(item: &T, needle: &str) -> bool {
    item.searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Fail unless `T` provides the comparator behind `sort`
pub fn ensure_sortable<T: CatalogItem>(sort: SortKey) -> CatalogResult<()> {
    match sort.comparator() {
        Some((field, _)) if !T::SORT_FIELDS.contains(&field) => Err(CatalogError::UnsupportedSortKey {
            key: sort.to_string(),
            domain: T::DOMAIN.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Stable in-place sort of borrowed items
pub fn sort_items<T: CatalogItem>(items: &mut [&T], sort: SortKey) -> CatalogResult<()> {
    ensure_sortable::<T>(sort)?;
    if let Some((field, direction)) = sort.comparator() {
        items.sort_by(|a, b| compare_metric(a.sort_metric(field), b.sort_metric(field), direction));
    }
    Ok(())
}

/// Filter and order `items` by query, filters and sort key
///
/// An empty query skips text search. Categories combine with AND; values
/// within a multi-select category combine with OR. Ties keep input order.
pub fn compute_view<'a, T: CatalogItem>(
    items: &'a [T],
    query: &str,
    filters: &FilterState<T::Filter>,
    sort: SortKey,
) -> CatalogResult<DerivedView<'a, T>> {
    ensure_sortable::<T>(sort)?;

    let needle = query.to_lowercase();
    let mut selected: Vec<&'a T> = items
        .iter()
        .filter(|item| needle.is_empty() || matches_query(*item, &needle))
        .filter(|item| filters.matches(item))
        .collect();

    sort_items(&mut selected, sort)?;

    component_debug!(
        Component::Catalog,
        domain = T::DOMAIN,
        input = items.len(),
        output = selected.len(),
        filters = filters.len(),
        sort = %sort,
        "Recomputed view"
    );

    Ok(DerivedView { items: selected })
}

/// Result counts per facet of `key`
///
/// Counts are taken over the items that satisfy every active category
/// except `key`, so each chip shows what selecting it would yield.
pub fn count_by_category<T: CatalogItem>(
    items: &[T],
    filters: &FilterState<T::Filter>,
    key: <T::Filter as ItemFilter>::Key,
) -> BTreeMap<<T::Filter as ItemFilter>::Facet, usize> {
    let mut counts = BTreeMap::new();
    for item in items.iter().filter(|item| filters.matches_except(item, key)) {
        for facet in T::Filter::facets(key, item) {
            *counts.entry(facet).or_insert(0) += 1;
        }
    }
    counts
}

/// Filtered and ordered borrow of the source items
#[derive(Debug, Clone)]
pub struct DerivedView<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T: CatalogItem> DerivedView<'a, T> {
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id()).collect()
    }
}

impl<'a, T> DerivedView<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a T] {
        &self.items
    }

    /// Items of the 1-based `page`
    pub fn page(&self, page: usize, page_size: usize) -> &[&'a T] {
        if page == 0 || page_size == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(page_size).min(self.items.len());
        let end = start.saturating_add(page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// True when results exist beyond the 1-based `page`
    pub fn has_more(&self, page: usize, page_size: usize) -> bool {
        self.items.len() > page.saturating_mul(page_size)
    }

    pub fn to_owned_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

/// Raw view parameters as they arrive from the front end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawViewRequest {
    #[serde(default)]
    pub query: String,
    /// `category=value` pairs
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// Validated view parameters for one item kind
#[derive(Debug, Clone)]
pub struct ViewRequest<T: CatalogItem> {
    pub query: String,
    pub filters: FilterState<T::Filter>,
    pub sort: SortKey,
}

impl<T: CatalogItem> Default for ViewRequest<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: FilterState::new(),
            sort: SortKey::Relevance,
        }
    }
}

impl<T: CatalogItem> ViewRequest<T> {
    /// Validate raw parameters
    ///
    /// Filter values are always checked strictly; the policy only governs
    /// unknown sort keys.
    pub fn parse(raw: &RawViewRequest, policy: ParsePolicy) -> CatalogResult<Self> {
        let filters = FilterState::parse_args(&raw.filters)?;
        let sort = match raw.sort.as_deref() {
            Some(sort) => SortKey::parse(sort, policy)?,
            None => SortKey::Relevance,
        };
        ensure_sortable::<T>(sort)?;
        Ok(Self {
            query: raw.query.clone(),
            filters,
            sort,
        })
    }

    pub fn run<'a>(&self, items: &'a [T]) -> CatalogResult<DerivedView<'a, T>> {
        compute_view(items, &self.query, &self.filters, self.sort)
    }
}
