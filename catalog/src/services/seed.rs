//! Built-in sample catalogue

use chrono::NaiveDate;
use shared::{
    Cuisine, DietaryTag, Difficulty, ItemId, Offer, OfferCategory, Recipe, ShoppingCategory, ShoppingItem, Store,
    StoreChain,
};

use crate::error::{CatalogError, CatalogResult};
use crate::traits::ItemSource;

/// In-memory item source holding the demo data set
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl SeedCatalog {
    pub fn new() -> Self {
        Self
    }
}

fn date(raw: &str) -> CatalogResult<NaiveDate> {
    raw.parse().map_err(|e| CatalogError::DataSource {
        message: format!("invalid seed date {raw}: {e}"),
    })
}

#[allow(clippy::too_many_arguments)]
fn offer(
    id: u32,
    product_name: &str,
    original_price: f64,
    discounted_price: f64,
    discount_percentage: u8,
    store_name: &str,
    expiration_date: &str,
    category: OfferCategory,
    unit: &str,
    is_favorite: bool,
    has_alert: bool,
    distance: f64,
) -> CatalogResult<Offer> {
    Ok(Offer {
        id: ItemId(id),
        product_name: product_name.to_string(),
        original_price,
        discounted_price,
        discount_percentage,
        store_name: store_name.to_string(),
        expiration_date: date(expiration_date)?,
        category,
        unit: unit.to_string(),
        is_favorite,
        has_alert,
        distance,
    })
}

struct RecipeSeed {
    id: u32,
    title: &'static str,
    cost_per_serving: f64,
    offer_coverage: u8,
    rating: f64,
    review_count: u32,
    cooking_time: u32,
    difficulty: Difficulty,
    servings: u32,
    dietary: &'static [DietaryTag],
    cuisine: Option<Cuisine>,
    is_favorite: bool,
    is_new: bool,
    savings: u8,
}

impl From<RecipeSeed> for Recipe {
    fn from(seed: RecipeSeed) -> Self {
        Recipe {
            id: ItemId(seed.id),
            title: seed.title.to_string(),
            cost_per_serving: seed.cost_per_serving,
            offer_coverage: seed.offer_coverage,
            rating: seed.rating,
            review_count: seed.review_count,
            cooking_time: seed.cooking_time,
            difficulty: seed.difficulty,
            servings: seed.servings,
            dietary: seed.dietary.to_vec(),
            cuisine: seed.cuisine,
            is_favorite: seed.is_favorite,
            is_new: seed.is_new,
            savings: seed.savings,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn store(
    id: u32,
    name: &str,
    chain: StoreChain,
    address: &str,
    distance: f64,
    is_open: bool,
    offers: u32,
    services: &[&str],
) -> Store {
    Store {
        id: ItemId(id),
        name: name.to_string(),
        chain,
        address: address.to_string(),
        distance,
        is_open,
        offers,
        services: services.iter().map(|s| s.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn shopping_item(
    id: u32,
    name: &str,
    brand: Option<&str>,
    quantity: u32,
    unit: &str,
    price: f64,
    original_price: f64,
    category: ShoppingCategory,
    store: &str,
    completed: bool,
    note: Option<&str>,
) -> ShoppingItem {
    ShoppingItem {
        id: ItemId(id),
        name: name.to_string(),
        brand: brand.map(str::to_string),
        quantity,
        unit: unit.to_string(),
        price,
        original_price,
        category,
        store: store.to_string(),
        has_offer: price < original_price,
        completed,
        note: note.map(str::to_string),
    }
}

impl ItemSource for SeedCatalog {
    fn offers(&self) -> CatalogResult<Vec<Offer>> {
        use OfferCategory::*;
        Ok(vec![
            offer(1, "Bio Äpfel Elstar", 3.49, 2.49, 29, "REWE", "2025-01-28", Produce, "1 kg", false, false, 0.8)?,
            offer(2, "Hackfleisch gemischt", 6.99, 4.99, 29, "Edeka", "2025-01-26", Meat, "500g", true, false, 1.2)?,
            offer(3, "Vollmilch 3,5%", 1.29, 0.99, 23, "Aldi", "2025-01-30", Dairy, "1L", false, true, 0.5)?,
            offer(4, "Pasta Penne", 1.99, 1.29, 35, "Lidl", "2025-02-15", Pantry, "500g", false, false, 1.8)?,
            offer(5, "Bananen", 2.49, 1.99, 20, "REWE", "2025-01-27", Produce, "1 kg", false, false, 0.8)?,
            offer(6, "Joghurt Natur", 2.99, 2.29, 23, "Edeka", "2025-02-01", Dairy, "500g", true, false, 1.2)?,
        ])
    }

    fn recipes(&self) -> CatalogResult<Vec<Recipe>> {
        use DietaryTag::*;
        let seeds = vec![
            RecipeSeed {
                id: 1,
                title: "Spaghetti Carbonara",
                cost_per_serving: 3.45,
                offer_coverage: 75,
                rating: 4.8,
                review_count: 234,
                cooking_time: 25,
                difficulty: Difficulty::Easy,
                servings: 4,
                dietary: &[Vegetarian],
                cuisine: Some(Cuisine::Italian),
                is_favorite: false,
                is_new: false,
                savings: 15,
            },
            RecipeSeed {
                id: 2,
                title: "Vegane Buddha Bowl",
                cost_per_serving: 4.20,
                offer_coverage: 60,
                rating: 4.6,
                review_count: 189,
                cooking_time: 35,
                difficulty: Difficulty::Medium,
                servings: 2,
                dietary: &[Vegan, GlutenFree],
                cuisine: Some(Cuisine::Asian),
                is_favorite: true,
                is_new: true,
                savings: 0,
            },
            RecipeSeed {
                id: 3,
                title: "Hähnchen-Curry mit Reis",
                cost_per_serving: 5.80,
                offer_coverage: 85,
                rating: 4.7,
                review_count: 156,
                cooking_time: 45,
                difficulty: Difficulty::Medium,
                servings: 4,
                dietary: &[LactoseFree],
                cuisine: Some(Cuisine::Indian),
                is_favorite: false,
                is_new: false,
                savings: 25,
            },
            RecipeSeed {
                id: 4,
                title: "Mediterrane Gemüsepfanne",
                cost_per_serving: 2.95,
                offer_coverage: 90,
                rating: 4.5,
                review_count: 98,
                cooking_time: 20,
                difficulty: Difficulty::Easy,
                servings: 3,
                dietary: &[Vegetarian, Vegan],
                cuisine: Some(Cuisine::Mediterranean),
                is_favorite: false,
                is_new: false,
                savings: 30,
            },
            RecipeSeed {
                id: 5,
                title: "Lachs mit Quinoa-Salat",
                cost_per_serving: 8.50,
                offer_coverage: 45,
                rating: 4.9,
                review_count: 67,
                cooking_time: 30,
                difficulty: Difficulty::Medium,
                servings: 2,
                dietary: &[GlutenFree, LowCarb],
                cuisine: None,
                is_favorite: true,
                is_new: true,
                savings: 0,
            },
            RecipeSeed {
                id: 6,
                title: "Klassische Bolognese",
                cost_per_serving: 4.75,
                offer_coverage: 70,
                rating: 4.4,
                review_count: 203,
                cooking_time: 90,
                difficulty: Difficulty::Hard,
                servings: 6,
                dietary: &[],
                cuisine: Some(Cuisine::Italian),
                is_favorite: false,
                is_new: false,
                savings: 20,
            },
        ];
        Ok(seeds.into_iter().map(Recipe::from).collect())
    }

    fn stores(&self) -> CatalogResult<Vec<Store>> {
        use StoreChain::*;
        Ok(vec![
            store(1, "REWE Mitte", Rewe, "Friedrichstraße 123, 10117 Berlin", 0.3, true, 24, &["Bäckerei", "Metzgerei", "Paketstation"]),
            store(2, "EDEKA Center", Edeka, "Potsdamer Platz 5, 10785 Berlin", 0.8, true, 31, &["Bäckerei", "Blumen", "Lotto"]),
            store(3, "Lidl", Lidl, "Alexanderplatz 12, 10178 Berlin", 1.2, false, 18, &["Bäckerei"]),
            store(4, "ALDI SÜD", Aldi, "Unter den Linden 45, 10117 Berlin", 1.5, true, 12, &[]),
            store(5, "Netto Marken-Discount", Netto, "Kurfürstendamm 78, 10709 Berlin", 2.1, true, 8, &["Paketstation"]),
        ])
    }

    fn shopping_items(&self) -> CatalogResult<Vec<ShoppingItem>> {
        use ShoppingCategory::*;
        Ok(vec![
            shopping_item(1, "Vollmilch 3,5%", Some("Weihenstephan"), 2, "l", 1.29, 1.49, Dairy, "REWE", false, None),
            shopping_item(2, "Bananen", None, 1, "kg", 1.99, 1.99, Produce, "REWE", false, Some("Reif aber nicht überreif")),
            shopping_item(3, "Hähnchenbrust", Some("Wiesenhof"), 500, "g", 4.99, 5.99, MeatFish, "EDEKA", true, None),
            shopping_item(4, "Vollkornbrot", Some("Mestemacher"), 1, "Stück", 2.49, 2.49, Bakery, "REWE", false, None),
            shopping_item(5, "Joghurt Natur", Some("Danone"), 4, "Stück", 0.59, 0.69, Dairy, "ALDI", false, None),
            shopping_item(6, "Tomaten", None, 500, "g", 2.99, 2.99, Produce, "EDEKA", true, Some("Cherry-Tomaten")),
        ])
    }
}
