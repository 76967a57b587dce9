//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Stable identifier of an offer, recipe, store or shopping list entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Following id; `None` at `u32::MAX`
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Component of the workspace emitting a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Catalog,
    Onboarding,
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Catalog => write!(f, "catalog"),
            Component::Onboarding => write!(f, "onboarding"),
            Component::Cli => write!(f, "sparkoch"),
        }
    }
}

/// Declares a closed, string-backed enumeration with `as_str`, `ALL`,
/// `Display` and case-insensitive `FromStr`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => $text:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SharedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                $(
                    if needle == $text.to_lowercase() $(|| needle == $alias.to_lowercase())* {
                        return Ok($name::$variant);
                    }
                )+
                Err(SharedError::UnknownVariant {
                    kind: $kind.to_string(),
                    value: s.to_string(),
                })
            }
        }
    };
}

string_enum! {
    /// Dietary tags attached to recipes and used as multi-select filter values
    DietaryTag, "dietary tag" {
        Vegetarian => "vegetarian",
        Vegan => "vegan",
        GlutenFree => "glutenfree" | "gluten-free",
        LactoseFree => "lactosefree" | "lactose-free",
        LowCarb => "lowcarb" | "low-carb",
        Keto => "keto",
        Paleo => "paleo",
        Diabetic => "diabetic",
    }
}

string_enum! {
    /// Cuisine a recipe belongs to
    Cuisine, "cuisine" {
        German => "german",
        Italian => "italian",
        Asian => "asian",
        Mediterranean => "mediterranean",
        Mexican => "mexican",
        Indian => "indian",
        French => "french",
        American => "american",
    }
}

string_enum! {
    /// Preparation difficulty of a recipe
    Difficulty, "difficulty" {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
}

string_enum! {
    /// Product category of a discount offer
    OfferCategory, "offer category" {
        Produce => "produce",
        Meat => "meat",
        Dairy => "dairy",
        Pantry => "pantry",
        Frozen => "frozen",
        Beverages => "beverages",
    }
}

impl OfferCategory {
    /// German display name shown on offer cards and matched by text search
    pub fn display_name(&self) -> &'static str {
        match self {
            OfferCategory::Produce => "Obst & Gemüse",
            OfferCategory::Meat => "Fleisch & Wurst",
            OfferCategory::Dairy => "Milchprodukte",
            OfferCategory::Pantry => "Grundnahrungsmittel",
            OfferCategory::Frozen => "Tiefkühl",
            OfferCategory::Beverages => "Getränke",
        }
    }
}

string_enum! {
    /// Supermarket chain operating a store
    StoreChain, "store chain" {
        Rewe => "REWE",
        Edeka => "EDEKA",
        Lidl => "Lidl",
        Aldi => "ALDI",
        Netto => "Netto",
    }
}

string_enum! {
    /// Aisle grouping used by the shopping list
    ShoppingCategory, "shopping category" {
        Dairy => "milchprodukte",
        Produce => "obst-gemuese",
        MeatFish => "fleisch-fisch",
        Bakery => "backwaren",
        Other => "sonstiges",
    }
}

impl ShoppingCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShoppingCategory::Dairy => "Milchprodukte",
            ShoppingCategory::Produce => "Obst & Gemüse",
            ShoppingCategory::MeatFish => "Fleisch & Fisch",
            ShoppingCategory::Bakery => "Backwaren",
            ShoppingCategory::Other => "Sonstiges",
        }
    }
}

impl Default for ShoppingCategory {
    fn default() -> Self {
        ShoppingCategory::Other
    }
}

string_enum! {
    /// Dietary preference chosen during onboarding
    DietaryPreference, "dietary preference" {
        Omnivore => "omnivore",
        Vegetarian => "vegetarian",
        Vegan => "vegan",
        Pescatarian => "pescatarian",
    }
}

impl Default for DietaryPreference {
    fn default() -> Self {
        DietaryPreference::Omnivore
    }
}

string_enum! {
    /// Allergens a user can exclude during onboarding
    Allergen, "allergen" {
        Gluten => "gluten",
        Lactose => "lactose",
        Nuts => "nuts",
        Eggs => "eggs",
        Soy => "soy",
        Shellfish => "shellfish",
        Sesame => "sesame",
        Mustard => "mustard",
    }
}
