//! Recipe search and filters

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use shared::{Cuisine, DietaryTag, Difficulty, ItemId, Recipe};

use crate::core::filter::{split_values, ItemFilter};
use crate::core::range::{
    bucket_range, buckets_containing, BareNumber, BucketFacet, NumericRange, COOKING_TIME_BUCKETS, PRICE_BUCKETS,
    SERVINGS_BUCKETS,
};
use crate::core::{CatalogItem, SortField};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecipeFilterKey {
    Dietary,
    Cuisine,
    Difficulty,
    CookingTime,
    MaxPrice,
    Servings,
}

impl RecipeFilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeFilterKey::Dietary => "dietary",
            RecipeFilterKey::Cuisine => "cuisine",
            RecipeFilterKey::Difficulty => "difficulty",
            RecipeFilterKey::CookingTime => "time",
            RecipeFilterKey::MaxPrice => "max-price",
            RecipeFilterKey::Servings => "servings",
        }
    }
}

impl fmt::Display for RecipeFilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeFilterKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dietary" => Ok(RecipeFilterKey::Dietary),
            "cuisine" => Ok(RecipeFilterKey::Cuisine),
            "difficulty" => Ok(RecipeFilterKey::Difficulty),
            "time" | "cookingtime" | "cooking-time" => Ok(RecipeFilterKey::CookingTime),
            "max-price" | "maxprice" => Ok(RecipeFilterKey::MaxPrice),
            "servings" => Ok(RecipeFilterKey::Servings),
            _ => Err(CatalogError::UnknownFilterCategory {
                category: s.to_string(),
                domain: Recipe::DOMAIN.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeFilter {
    /// Any of the tags
    Dietary(BTreeSet<DietaryTag>),
    /// Any of the cuisines
    Cuisine(BTreeSet<Cuisine>),
    Difficulty(Difficulty),
    /// Cooking time in minutes
    CookingTime(NumericRange),
    /// Cost per serving
    MaxPrice(NumericRange),
    Servings(NumericRange),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum RecipeFacet {
    Dietary(DietaryTag),
    Cuisine(Cuisine),
    Difficulty(Difficulty),
    CookingTime(BucketFacet),
    MaxPrice(BucketFacet),
    Servings(BucketFacet),
}

impl fmt::Display for RecipeFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeFacet::Dietary(tag) => write!(f, "{tag}"),
            RecipeFacet::Cuisine(cuisine) => write!(f, "{cuisine}"),
            RecipeFacet::Difficulty(difficulty) => write!(f, "{difficulty}"),
            RecipeFacet::CookingTime(bucket) | RecipeFacet::MaxPrice(bucket) | RecipeFacet::Servings(bucket) => {
                write!(f, "{bucket}")
            }
        }
    }
}

fn toggled<T: Ord + Clone>(current: Option<&BTreeSet<T>>, value: &T) -> BTreeSet<T> {
    let mut set = current.cloned().unwrap_or_default();
    if !set.remove(value) {
        set.insert(value.clone());
    }
    set
}

fn parse_set<T>(key: RecipeFilterKey, value: &str) -> CatalogResult<BTreeSet<T>>
where
    T: Ord + FromStr,
    T::Err: fmt::Display,
{
    let set = split_values(value)
        .map(|part| part.parse::<T>())
        .collect::<Result<BTreeSet<T>, _>>()
        .map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err))?;
    if set.is_empty() {
        return Err(CatalogError::invalid_filter(key.as_str(), value, "no values selected"));
    }
    Ok(set)
}

fn parse_range(key: RecipeFilterKey, value: &str, bare: BareNumber) -> CatalogResult<NumericRange> {
    NumericRange::parse_with(value, bare).map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err))
}

impl ItemFilter for RecipeFilter {
    type Item = Recipe;
    type Key = RecipeFilterKey;
    type Facet = RecipeFacet;

    const KEYS: &'static [RecipeFilterKey] = &[
        RecipeFilterKey::Dietary,
        RecipeFilterKey::Cuisine,
        RecipeFilterKey::Difficulty,
        RecipeFilterKey::CookingTime,
        RecipeFilterKey::MaxPrice,
        RecipeFilterKey::Servings,
    ];

    fn key(&self) -> RecipeFilterKey {
        match self {
            RecipeFilter::Dietary(_) => RecipeFilterKey::Dietary,
            RecipeFilter::Cuisine(_) => RecipeFilterKey::Cuisine,
            RecipeFilter::Difficulty(_) => RecipeFilterKey::Difficulty,
            RecipeFilter::CookingTime(_) => RecipeFilterKey::CookingTime,
            RecipeFilter::MaxPrice(_) => RecipeFilterKey::MaxPrice,
            RecipeFilter::Servings(_) => RecipeFilterKey::Servings,
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            RecipeFilter::Dietary(tags) => tags.iter().any(|tag| recipe.has_tag(*tag)),
            RecipeFilter::Cuisine(cuisines) => recipe.cuisine.map_or(false, |cuisine| cuisines.contains(&cuisine)),
            RecipeFilter::Difficulty(difficulty) => recipe.difficulty == *difficulty,
            RecipeFilter::CookingTime(range) => range.contains(f64::from(recipe.cooking_time)),
            RecipeFilter::MaxPrice(range) => range.contains(recipe.cost_per_serving),
            RecipeFilter::Servings(range) => range.contains(f64::from(recipe.servings)),
        }
    }

    fn selection_len(&self) -> usize {
        match self {
            RecipeFilter::Dietary(tags) => tags.len(),
            RecipeFilter::Cuisine(cuisines) => cuisines.len(),
            _ => 1,
        }
    }

    fn facets(key: RecipeFilterKey, recipe: &Recipe) -> Vec<RecipeFacet> {
        match key {
            RecipeFilterKey::Dietary => {
                let tags: BTreeSet<DietaryTag> = recipe.dietary.iter().copied().collect();
                tags.into_iter().map(RecipeFacet::Dietary).collect()
            }
            RecipeFilterKey::Cuisine => recipe.cuisine.map(RecipeFacet::Cuisine).into_iter().collect(),
            RecipeFilterKey::Difficulty => vec![RecipeFacet::Difficulty(recipe.difficulty)],
            RecipeFilterKey::CookingTime => buckets_containing(COOKING_TIME_BUCKETS, f64::from(recipe.cooking_time))
                .into_iter()
                .map(RecipeFacet::CookingTime)
                .collect(),
            RecipeFilterKey::MaxPrice => buckets_containing(PRICE_BUCKETS, recipe.cost_per_serving)
                .into_iter()
                .map(RecipeFacet::MaxPrice)
                .collect(),
            RecipeFilterKey::Servings => buckets_containing(SERVINGS_BUCKETS, f64::from(recipe.servings))
                .into_iter()
                .map(RecipeFacet::Servings)
                .collect(),
        }
    }

    fn facet_key(facet: &RecipeFacet) -> RecipeFilterKey {
        match facet {
            RecipeFacet::Dietary(_) => RecipeFilterKey::Dietary,
            RecipeFacet::Cuisine(_) => RecipeFilterKey::Cuisine,
            RecipeFacet::Difficulty(_) => RecipeFilterKey::Difficulty,
            RecipeFacet::CookingTime(_) => RecipeFilterKey::CookingTime,
            RecipeFacet::MaxPrice(_) => RecipeFilterKey::MaxPrice,
            RecipeFacet::Servings(_) => RecipeFilterKey::Servings,
        }
    }

    fn select(current: Option<&Self>, facet: &RecipeFacet) -> Option<Self> {
        let next = match facet {
            RecipeFacet::Dietary(tag) => {
                let current = match current {
                    Some(RecipeFilter::Dietary(tags)) => Some(tags),
                    _ => None,
                };
                RecipeFilter::Dietary(toggled(current, tag))
            }
            RecipeFacet::Cuisine(cuisine) => {
                let current = match current {
                    Some(RecipeFilter::Cuisine(cuisines)) => Some(cuisines),
                    _ => None,
                };
                RecipeFilter::Cuisine(toggled(current, cuisine))
            }
            RecipeFacet::Difficulty(difficulty) => RecipeFilter::Difficulty(*difficulty),
            RecipeFacet::CookingTime(bucket) => RecipeFilter::CookingTime(bucket_range(COOKING_TIME_BUCKETS, bucket)?),
            RecipeFacet::MaxPrice(bucket) => RecipeFilter::MaxPrice(bucket_range(PRICE_BUCKETS, bucket)?),
            RecipeFacet::Servings(bucket) => RecipeFilter::Servings(bucket_range(SERVINGS_BUCKETS, bucket)?),
        };

        // Clicking the selected single-value chip deselects it
        if next.selection_len() == 0 || (!is_multi(&next) && current == Some(&next)) {
            return None;
        }
        Some(next)
    }

    fn parse(key: &str, value: &str) -> CatalogResult<Self> {
        let key: RecipeFilterKey = key.parse()?;
        let filter = match key {
            RecipeFilterKey::Dietary => RecipeFilter::Dietary(parse_set(key, value)?),
            RecipeFilterKey::Cuisine => RecipeFilter::Cuisine(parse_set(key, value)?),
            RecipeFilterKey::Difficulty => RecipeFilter::Difficulty(
                value
                    .parse()
                    .map_err(|err| CatalogError::invalid_filter(key.as_str(), value, err))?,
            ),
            RecipeFilterKey::CookingTime => RecipeFilter::CookingTime(parse_range(key, value, BareNumber::Reject)?),
            RecipeFilterKey::MaxPrice => RecipeFilter::MaxPrice(parse_range(key, value, BareNumber::UpperBound)?),
            RecipeFilterKey::Servings => RecipeFilter::Servings(parse_range(key, value, BareNumber::Exact)?),
        };
        Ok(filter)
    }
}

fn is_multi(filter: &RecipeFilter) -> bool {
    matches!(filter, RecipeFilter::Dietary(_) | RecipeFilter::Cuisine(_))
}

impl CatalogItem for Recipe {
    type Filter = RecipeFilter;

    const DOMAIN: &'static str = "recipes";

    const SORT_FIELDS: &'static [SortField] = &[
        SortField::Price,
        SortField::CookingTime,
        SortField::Rating,
        SortField::Recency,
        SortField::Popularity,
        SortField::Savings,
    ];

    fn id(&self) -> ItemId {
        self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(1 + self.dietary.len());
        fields.push(self.title.as_str());
        fields.extend(self.dietary.iter().map(|tag| tag.as_str()));
        fields
    }

    fn sort_metric(&self, field: SortField) -> Option<f64> {
        match field {
            SortField::Price => Some(self.cost_per_serving),
            SortField::CookingTime => Some(f64::from(self.cooking_time)),
            SortField::Rating => Some(self.rating),
            SortField::Recency => Some(if self.is_new { 1.0 } else { 0.0 }),
            SortField::Popularity => Some(f64::from(self.review_count)),
            SortField::Savings => Some(f64::from(self.savings)),
            SortField::Distance | SortField::Discount | SortField::Expiry => None,
        }
    }
}
