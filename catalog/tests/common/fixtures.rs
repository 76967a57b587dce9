//! Test fixtures and data for catalog tests

use chrono::NaiveDate;
use shared::{Cuisine, DietaryTag, Difficulty, ItemId, Offer, OfferCategory, Recipe, Store, StoreChain};

/// Standard records used across the test suites
pub struct TestFixtures;

impl TestFixtures {
    pub const DEFAULT_EXPIRY: &'static str = "2025-01-30";

    /// Offer with the given name, discounted price and category
    pub fn offer(id: u32, name: &str, price: f64, category: OfferCategory) -> Offer {
        Offer {
            id: ItemId(id),
            product_name: name.to_string(),
            original_price: price + 1.0,
            discounted_price: price,
            discount_percentage: 20,
            store_name: "REWE".to_string(),
            expiration_date: Self::DEFAULT_EXPIRY.parse::<NaiveDate>().unwrap(),
            category,
            unit: "1 kg".to_string(),
            is_favorite: false,
            has_alert: false,
            distance: 1.0,
        }
    }

    pub fn offer_at(id: u32, name: &str, price: f64, store: &str, distance: f64) -> Offer {
        Offer {
            store_name: store.to_string(),
            distance,
            ..Self::offer(id, name, price, OfferCategory::Produce)
        }
    }

    /// The two-item list of the end-to-end scenario
    pub fn bananas_and_milk() -> Vec<Offer> {
        vec![
            Self::offer(1, "Bananen", 1.99, OfferCategory::Produce),
            Self::offer(2, "Milch", 1.29, OfferCategory::Dairy),
        ]
    }

    /// Offers priced on and around the price bucket boundaries
    pub fn priced_offers() -> Vec<Offer> {
        [4.99, 5.0, 7.5, 10.0, 10.01, 19.99, 20.0, 35.0]
            .iter()
            .enumerate()
            .map(|(index, price)| Self::offer(index as u32 + 1, &format!("Artikel {index}"), *price, OfferCategory::Pantry))
            .collect()
    }

    pub fn recipe(id: u32, title: &str, dietary: &[DietaryTag], cuisine: Option<Cuisine>) -> Recipe {
        Recipe {
            id: ItemId(id),
            title: title.to_string(),
            cost_per_serving: 4.0,
            offer_coverage: 50,
            rating: 4.5,
            review_count: 100,
            cooking_time: 30,
            difficulty: Difficulty::Easy,
            servings: 4,
            dietary: dietary.to_vec(),
            cuisine,
            is_favorite: false,
            is_new: false,
            savings: 10,
        }
    }

    /// Recipes mixing dietary tags and cuisines
    pub fn tagged_recipes() -> Vec<Recipe> {
        use DietaryTag::*;
        vec![
            Self::recipe(1, "Vegane Pasta", &[Vegan], Some(Cuisine::Italian)),
            Self::recipe(2, "Gemüselasagne", &[Vegetarian], Some(Cuisine::Italian)),
            Self::recipe(3, "Tofu Curry", &[Vegan, GlutenFree], Some(Cuisine::Indian)),
            Self::recipe(4, "Schnitzel", &[], Some(Cuisine::German)),
            Self::recipe(5, "Vegane Bowl", &[Vegan], Some(Cuisine::Asian)),
        ]
    }

    pub fn store(id: u32, name: &str, chain: StoreChain, distance: f64, offers: u32) -> Store {
        Store {
            id: ItemId(id),
            name: name.to_string(),
            chain,
            address: format!("Teststraße {id}, 10115 Berlin"),
            distance,
            is_open: true,
            offers,
            services: Vec::new(),
        }
    }
}
