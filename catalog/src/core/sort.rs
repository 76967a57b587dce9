//! Sort key registry
//!
//! Every key except `Relevance` maps to exactly one (field, direction)
//! comparator. Relevance keeps the input order.

use serde::{Deserialize, Serialize};
use shared::{component_warn, Component, ParsePolicy};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};

/// Numeric attribute a comparator reads from an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Price,
    CookingTime,
    Rating,
    Recency,
    Popularity,
    Distance,
    Discount,
    Expiry,
    Savings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "price-asc", alias = "price-low")]
    PriceAsc,
    #[serde(rename = "price-desc", alias = "price-high")]
    PriceDesc,
    #[serde(rename = "time-asc", alias = "time-short")]
    TimeAsc,
    #[serde(rename = "time-desc", alias = "time-long")]
    TimeDesc,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "popular")]
    Popular,
    #[serde(rename = "distance")]
    Distance,
    #[serde(rename = "discount")]
    Discount,
    #[serde(rename = "expiring")]
    Expiring,
    #[serde(rename = "savings")]
    Savings,
}

impl SortKey {
    pub const ALL: &'static [SortKey] = &[
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::TimeAsc,
        SortKey::TimeDesc,
        SortKey::Rating,
        SortKey::Newest,
        SortKey::Popular,
        SortKey::Distance,
        SortKey::Discount,
        SortKey::Expiring,
        SortKey::Savings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::TimeAsc => "time-asc",
            SortKey::TimeDesc => "time-desc",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
            SortKey::Distance => "distance",
            SortKey::Discount => "discount",
            SortKey::Expiring => "expiring",
            SortKey::Savings => "savings",
        }
    }

    /// Comparator behind this key; `None` for relevance
    pub fn comparator(&self) -> Option<(SortField, Direction)> {
        use Direction::*;
        match self {
            SortKey::Relevance => None,
            SortKey::PriceAsc => Some((SortField::Price, Ascending)),
            SortKey::PriceDesc => Some((SortField::Price, Descending)),
            SortKey::TimeAsc => Some((SortField::CookingTime, Ascending)),
            SortKey::TimeDesc => Some((SortField::CookingTime, Descending)),
            SortKey::Rating => Some((SortField::Rating, Descending)),
            SortKey::Newest => Some((SortField::Recency, Descending)),
            SortKey::Popular => Some((SortField::Popularity, Descending)),
            SortKey::Distance => Some((SortField::Distance, Ascending)),
            SortKey::Discount => Some((SortField::Discount, Descending)),
            SortKey::Expiring => Some((SortField::Expiry, Ascending)),
            SortKey::Savings => Some((SortField::Savings, Descending)),
        }
    }

    /// Parse a boundary string under the given policy
    ///
    /// Lenient parsing maps unknown keys to `Relevance`.
    pub fn parse(raw: &str, policy: ParsePolicy) -> CatalogResult<Self> {
        match (raw.parse::<SortKey>(), policy) {
            (Ok(key), _) => Ok(key),
            (Err(err), ParsePolicy::Strict) => Err(err),
            (Err(_), ParsePolicy::Lenient) => {
                component_warn!(Component::Catalog, sort_key = raw, "Unknown sort key, using relevance");
                Ok(SortKey::Relevance)
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_lowercase().as_str() {
            "" | "relevance" => SortKey::Relevance,
            "price-asc" | "price-low" => SortKey::PriceAsc,
            "price-desc" | "price-high" => SortKey::PriceDesc,
            "time-asc" | "time-short" => SortKey::TimeAsc,
            "time-desc" | "time-long" => SortKey::TimeDesc,
            "rating" => SortKey::Rating,
            "newest" => SortKey::Newest,
            "popular" => SortKey::Popular,
            "distance" => SortKey::Distance,
            "discount" => SortKey::Discount,
            "expiring" => SortKey::Expiring,
            "savings" => SortKey::Savings,
            _ => return Err(CatalogError::InvalidSortKey { key: s.to_string() }),
        };
        Ok(key)
    }
}

/// Compare two metric values; items without a value sort last
pub fn compare_metric(a: Option<f64>, b: Option<f64>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match direction {
            Direction::Ascending => x.total_cmp(&y),
            Direction::Descending => y.total_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
