use serde::{Deserialize, Serialize};

use crate::types::{Cuisine, DietaryTag, Difficulty, ItemId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: ItemId,
    pub title: String,
    pub cost_per_serving: f64,
    /// Share of ingredients currently on offer, in percent
    pub offer_coverage: u8,
    pub rating: f64,
    pub review_count: u32,
    /// Minutes
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
    #[serde(default)]
    pub dietary: Vec<DietaryTag>,
    #[serde(default)]
    pub cuisine: Option<Cuisine>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_new: bool,
    /// Savings against regular prices, in percent
    #[serde(default)]
    pub savings: u8,
}

impl Recipe {
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.dietary.contains(&tag)
    }
}
