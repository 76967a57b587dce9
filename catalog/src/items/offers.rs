//! Offer search, filters and store grouping

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use shared::{ItemId, Offer, OfferCategory};

use crate::core::filter::{split_values, ItemFilter};
use crate::core::grouping::{group_by_key, sort_groups_by, Group};
use crate::core::range::{
    bucket_range, buckets_containing, BareNumber, BucketFacet, NumericRange, DISTANCE_BUCKETS, PRICE_BUCKETS,
};
use crate::core::{CatalogItem, SortField};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OfferFilterKey {
    Category,
    Price,
    Distance,
    Store,
}

impl OfferFilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferFilterKey::Category => "category",
            OfferFilterKey::Price => "price",
            OfferFilterKey::Distance => "distance",
            OfferFilterKey::Store => "store",
        }
    }
}

impl fmt::Display for OfferFilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferFilterKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" => Ok(OfferFilterKey::Category),
            "price" => Ok(OfferFilterKey::Price),
            "distance" => Ok(OfferFilterKey::Distance),
            "store" | "stores" => Ok(OfferFilterKey::Store),
            _ => Err(CatalogError::UnknownFilterCategory {
                category: s.to_string(),
                domain: Offer::DOMAIN.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OfferFilter {
    Category(OfferCategory),
    /// Discounted price
    Price(NumericRange),
    /// Kilometres to the store
    Distance(NumericRange),
    /// Any of the store names
    Stores(BTreeSet<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum OfferFacet {
    Category(OfferCategory),
    Price(BucketFacet),
    Distance(BucketFacet),
    Store(String),
}

impl fmt::Display for OfferFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferFacet::Category(category) => write!(f, "{category}"),
            OfferFacet::Price(bucket) | OfferFacet::Distance(bucket) => write!(f, "{bucket}"),
            OfferFacet::Store(store) => f.write_str(store),
        }
    }
}

impl ItemFilter for OfferFilter {
    type Item = Offer;
    type Key = OfferFilterKey;
    type Facet = OfferFacet;

    const KEYS: &'static [OfferFilterKey] = &[
        OfferFilterKey::Category,
        OfferFilterKey::Price,
        OfferFilterKey::Distance,
        OfferFilterKey::Store,
    ];

    fn key(&self) -> OfferFilterKey {
        match self {
            OfferFilter::Category(_) => OfferFilterKey::Category,
            OfferFilter::Price(_) => OfferFilterKey::Price,
            OfferFilter::Distance(_) => OfferFilterKey::Distance,
            OfferFilter::Stores(_) => OfferFilterKey::Store,
        }
    }

    fn matches(&self, offer: &Offer) -> bool {
        match self {
            OfferFilter::Category(category) => offer.category == *category,
            OfferFilter::Price(range) => range.contains(offer.discounted_price),
            OfferFilter::Distance(range) => range.contains(offer.distance),
            OfferFilter::Stores(stores) => stores.contains(&offer.store_name),
        }
    }

    fn selection_len(&self) -> usize {
        match self {
            OfferFilter::Stores(stores) => stores.len(),
            _ => 1,
        }
    }

    fn facets(key: OfferFilterKey, offer: &Offer) -> Vec<OfferFacet> {
        match key {
            OfferFilterKey::Category => vec![OfferFacet::Category(offer.category)],
            OfferFilterKey::Price => buckets_containing(PRICE_BUCKETS, offer.discounted_price)
                .into_iter()
                .map(OfferFacet::Price)
                .collect(),
            OfferFilterKey::Distance => buckets_containing(DISTANCE_BUCKETS, offer.distance)
                .into_iter()
                .map(OfferFacet::Distance)
                .collect(),
            OfferFilterKey::Store => vec![OfferFacet::Store(offer.store_name.clone())],
        }
    }

    fn facet_key(facet: &OfferFacet) -> OfferFilterKey {
        match facet {
            OfferFacet::Category(_) => OfferFilterKey::Category,
            OfferFacet::Price(_) => OfferFilterKey::Price,
            OfferFacet::Distance(_) => OfferFilterKey::Distance,
            OfferFacet::Store(_) => OfferFilterKey::Store,
        }
    }

    fn select(current: Option<&Self>, facet: &OfferFacet) -> Option<Self> {
        let next = match facet {
            OfferFacet::Store(store) => {
                let mut stores = match current {
                    Some(OfferFilter::Stores(stores)) => stores.clone(),
                    _ => BTreeSet::new(),
                };
                if !stores.remove(store) {
                    stores.insert(store.clone());
                }
                return (!stores.is_empty()).then_some(OfferFilter::Stores(stores));
            }
            OfferFacet::Category(category) => OfferFilter::Category(*category),
            OfferFacet::Price(bucket) => OfferFilter::Price(bucket_range(PRICE_BUCKETS, bucket)?),
            OfferFacet::Distance(bucket) => OfferFilter::Distance(bucket_range(DISTANCE_BUCKETS, bucket)?),
        };

        if current == Some(&next) {
            None
        } else {
            Some(next)
        }
    }

    fn parse(key: &str, value: &str) -> CatalogResult<Self> {
        let key: OfferFilterKey = key.parse()?;
        let filter = match key {
            OfferFilterKey::Category => OfferFilter::Category(
                value
                    .parse()
                    .map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err))?,
            ),
            OfferFilterKey::Price => OfferFilter::Price(
                NumericRange::parse(value).map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err))?,
            ),
            OfferFilterKey::Distance => OfferFilter::Distance(
                NumericRange::parse_with(value, BareNumber::UpperBound)
                    .map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err))?,
            ),
            OfferFilterKey::Store => {
                let stores: BTreeSet<String> = split_values(value).map(str::to_string).collect();
                if stores.is_empty() {
                    return Err(CatalogError::invalid_filter(key.as_str(), value, "no stores selected"));
                }
                OfferFilter::Stores(stores)
            }
        };
        Ok(filter)
    }
}

impl CatalogItem for Offer {
    type Filter = OfferFilter;

    const DOMAIN: &'static str = "offers";

    const SORT_FIELDS: &'static [SortField] =
        &[SortField::Price, SortField::Distance, SortField::Discount, SortField::Expiry];

    fn id(&self) -> ItemId {
        self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.product_name.as_str(),
            self.category.display_name(),
            self.store_name.as_str(),
        ]
    }

    fn sort_metric(&self, field: SortField) -> Option<f64> {
        match field {
            SortField::Price => Some(self.discounted_price),
            SortField::Distance => Some(self.distance),
            SortField::Discount => Some(f64::from(self.discount_percentage)),
            SortField::Expiry => Some(f64::from(self.expiration_date.num_days_from_ce())),
            _ => None,
        }
    }
}

/// Offers grouped by store, nearest store first
///
/// Offers keep their order from `offers` within each group.
pub fn group_offers_by_store<'a, I>(offers: I) -> Vec<Group<'a, String, Offer>>
where
    I: IntoIterator<Item = &'a Offer>,
{
    let mut groups = group_by_key(offers, |offer| offer.store_name.clone());
    sort_groups_by(&mut groups, |group| group.first().map_or(f64::MAX, |offer| offer.distance));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_category() {
        assert_eq!(
            OfferFilter::parse("category", "dairy").unwrap(),
            OfferFilter::Category(OfferCategory::Dairy)
        );
        assert_eq!(
            OfferFilter::parse("price", "5-10").unwrap(),
            OfferFilter::Price(NumericRange::between(5.0, 10.0))
        );
        assert_eq!(
            OfferFilter::parse("distance", "2").unwrap(),
            OfferFilter::Distance(NumericRange::at_most(2.0))
        );
        assert_eq!(
            OfferFilter::parse("store", "REWE, Lidl").unwrap().selection_len(),
            2
        );
    }

    #[test]
    fn price_requires_explicit_range() {
        assert!(matches!(
            OfferFilter::parse("price", "7"),
            Err(CatalogError::InvalidFilterValue { .. })
        ));
        assert!(matches!(
            OfferFilter::parse("price", "10-5"),
            Err(CatalogError::InvalidFilterValue { .. })
        ));
    }

    #[test]
    fn store_chips_toggle_membership() {
        let rewe = OfferFacet::Store("REWE".to_string());
        let lidl = OfferFacet::Store("Lidl".to_string());

        let one = OfferFilter::select(None, &rewe).unwrap();
        let two = OfferFilter::select(Some(&one), &lidl).unwrap();
        assert_eq!(two.selection_len(), 2);

        let back = OfferFilter::select(Some(&two), &rewe).unwrap();
        assert_eq!(back, OfferFilter::Stores(["Lidl".to_string()].into_iter().collect()));
        assert_eq!(OfferFilter::select(Some(&back), &lidl), None);
    }

    #[test]
    fn category_chip_replaces_or_deselects() {
        let dairy = OfferFacet::Category(OfferCategory::Dairy);
        let meat = OfferFacet::Category(OfferCategory::Meat);

        let selected = OfferFilter::select(None, &dairy).unwrap();
        assert_eq!(
            OfferFilter::select(Some(&selected), &meat),
            Some(OfferFilter::Category(OfferCategory::Meat))
        );
        assert_eq!(OfferFilter::select(Some(&selected), &dairy), None);
    }
}
