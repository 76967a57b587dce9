//! Store locator filters

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use shared::{ItemId, Store, StoreChain};

use crate::core::filter::{split_values, ItemFilter};
use crate::core::range::{bucket_range, buckets_containing, BucketFacet, NumericRange, DISTANCE_BUCKETS};
use crate::core::{CatalogItem, SortField};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreFilterKey {
    Chain,
    Radius,
}

impl StoreFilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreFilterKey::Chain => "chain",
            StoreFilterKey::Radius => "radius",
        }
    }
}

impl fmt::Display for StoreFilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreFilterKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chain" => Ok(StoreFilterKey::Chain),
            "radius" => Ok(StoreFilterKey::Radius),
            _ => Err(CatalogError::UnknownFilterCategory {
                category: s.to_string(),
                domain: Store::DOMAIN.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreFilter {
    Chains(BTreeSet<StoreChain>),
    Radius(NumericRange),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum StoreFacet {
    Chain(StoreChain),
    Radius(BucketFacet),
}

impl fmt::Display for StoreFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreFacet::Chain(chain) => write!(f, "{chain}"),
            StoreFacet::Radius(bucket) => write!(f, "{bucket} km"),
        }
    }
}

impl ItemFilter for StoreFilter {
    type Item = Store;
    type Key = StoreFilterKey;
    type Facet = StoreFacet;

    const KEYS: &'static [StoreFilterKey] = &[StoreFilterKey::Chain, StoreFilterKey::Radius];

    fn key(&self) -> StoreFilterKey {
        match self {
            StoreFilter::Chains(_) => StoreFilterKey::Chain,
            StoreFilter::Radius(_) => StoreFilterKey::Radius,
        }
    }

    fn matches(&self, store: &Store) -> bool {
        match self {
            StoreFilter::Chains(chains) => chains.contains(&store.chain),
            StoreFilter::Radius(range) => range.contains(store.distance),
        }
    }

    fn selection_len(&self) -> usize {
        match self {
            StoreFilter::Chains(chains) => chains.len(),
            StoreFilter::Radius(_) => 1,
        }
    }

    fn facets(key: StoreFilterKey, store: &Store) -> Vec<StoreFacet> {
        match key {
            StoreFilterKey::Chain => vec![StoreFacet::Chain(store.chain)],
            StoreFilterKey::Radius => buckets_containing(DISTANCE_BUCKETS, store.distance)
                .into_iter()
                .map(StoreFacet::Radius)
                .collect(),
        }
    }

    fn facet_key(facet: &StoreFacet) -> StoreFilterKey {
        match facet {
            StoreFacet::Chain(_) => StoreFilterKey::Chain,
            StoreFacet::Radius(_) => StoreFilterKey::Radius,
        }
    }

    fn select(current: Option<&Self>, facet: &StoreFacet) -> Option<Self> {
        match facet {
            StoreFacet::Chain(chain) => {
                let mut chains = match current {
                    Some(StoreFilter::Chains(chains)) => chains.clone(),
                    _ => BTreeSet::new(),
                };
                if !chains.remove(chain) {
                    chains.insert(*chain);
                }
                (!chains.is_empty()).then_some(StoreFilter::Chains(chains))
            }
            StoreFacet::Radius(bucket) => {
                let next = StoreFilter::Radius(bucket_range(DISTANCE_BUCKETS, bucket)?);
                (current != Some(&next)).then_some(next)
            }
        }
    }

    fn parse(key: &str, value: &str) -> CatalogResult<Self> {
        let key: StoreFilterKey = key.parse()?;
        match key {
            StoreFilterKey::Chain => {
                let chains = split_values(value)
                    .map(str::parse::<StoreChain>)
                    .collect::<Result<BTreeSet<_>, _>>()
                    .map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err))?;
                if chains.is_empty() {
                    return Err(CatalogError::invalid_filter(key.as_str(), value, "no chains selected"));
                }
                Ok(StoreFilter::Chains(chains))
            }
            StoreFilterKey::Radius => NumericRange::parse_upper_bound(value)
                .map(StoreFilter::Radius)
                .map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err)),
        }
    }
}

impl CatalogItem for Store {
    type Filter = StoreFilter;

    const DOMAIN: &'static str = "stores";

    const SORT_FIELDS: &'static [SortField] = &[SortField::Distance, SortField::Popularity];

    fn id(&self) -> ItemId {
        self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.chain.as_str(), self.address.as_str()]
    }

    fn sort_metric(&self, field: SortField) -> Option<f64> {
        match field {
            SortField::Distance => Some(self.distance),
            SortField::Popularity => Some(f64::from(self.offers)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_an_upper_bound() {
        let filter = StoreFilter::parse("radius", "2").unwrap();
        assert_eq!(filter, StoreFilter::Radius(NumericRange::at_most(2.0)));
    }

    #[test]
    fn chain_names_parse_case_insensitively() {
        let filter = StoreFilter::parse("chain", "rewe,aldi").unwrap();
        assert_eq!(
            filter,
            StoreFilter::Chains([StoreChain::Rewe, StoreChain::Aldi].into_iter().collect())
        );
        assert!(StoreFilter::parse("chain", "Kaufland").is_err());
    }

    #[test]
    fn radius_chip_deselects_when_clicked_twice() {
        let facet = StoreFacet::Radius(BucketFacet { position: 2, label: "5" });
        let selected = StoreFilter::select(None, &facet).unwrap();
        assert_eq!(selected, StoreFilter::Radius(NumericRange::at_most(5.0)));
        assert_eq!(StoreFilter::select(Some(&selected), &facet), None);
    }
}
