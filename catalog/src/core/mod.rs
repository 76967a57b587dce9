//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod engine;
pub mod filter;
pub mod grouping;
pub mod range;
pub mod search;
pub mod sort;

pub use engine::{
    compute_view, count_by_category, matches_query, sort_items, CatalogItem, DerivedView, RawViewRequest,
    ViewRequest,
};
pub use filter::{FilterState, ItemFilter};
pub use grouping::{group_by_key, sort_groups_by, Group};
pub use range::{BareNumber, Bucket, BucketFacet, NumericRange, RangeError};
pub use search::{suggest, SearchHistory};
pub use sort::{Direction, SortField, SortKey};
