//! Registration form data and typed field updates

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::{Allergen, DietaryPreference};

use crate::core::OnboardingStep;
use crate::error::{OnboardingError, OnboardingResult};

pub const MIN_SEARCH_RADIUS: u8 = 2;
pub const MAX_SEARCH_RADIUS: u8 = 15;
pub const DEFAULT_SEARCH_RADIUS: u8 = 5;
pub const DEFAULT_WEEKLY_BUDGET: u32 = 75;
pub const DEFAULT_HOUSEHOLD_SIZE: u32 = 2;

/// Everything the user enters across the four steps
///
/// Password fields are kept in memory for validation only and are never
/// serialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(skip_serializing, default)]
    pub confirm_password: String,

    pub postal_code: String,
    /// Kilometres
    pub search_radius: u8,

    pub dietary_preference: DietaryPreference,
    #[serde(default)]
    pub allergens: BTreeSet<Allergen>,

    /// Euro per week
    pub weekly_budget: u32,
    pub household_size: u32,
    #[serde(default)]
    pub terms_accepted: bool,
}

impl Default for OnboardingFormData {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            postal_code: String::new(),
            search_radius: DEFAULT_SEARCH_RADIUS,
            dietary_preference: DietaryPreference::default(),
            allergens: BTreeSet::new(),
            weekly_budget: DEFAULT_WEEKLY_BUDGET,
            household_size: DEFAULT_HOUSEHOLD_SIZE,
            terms_accepted: false,
        }
    }
}

impl OnboardingFormData {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Apply one field edit
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(value) => self.first_name = value,
            FieldUpdate::LastName(value) => self.last_name = value,
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Password(value) => self.password = value,
            FieldUpdate::ConfirmPassword(value) => self.confirm_password = value,
            FieldUpdate::PostalCode(value) => self.postal_code = value,
            FieldUpdate::SearchRadius(km) => self.search_radius = km.clamp(MIN_SEARCH_RADIUS, MAX_SEARCH_RADIUS),
            FieldUpdate::DietaryPreference(preference) => self.dietary_preference = preference,
            FieldUpdate::Allergens(allergens) => self.allergens = allergens,
            FieldUpdate::ToggleAllergen(allergen) => {
                if !self.allergens.remove(&allergen) {
                    self.allergens.insert(allergen);
                }
            }
            FieldUpdate::WeeklyBudget(budget) => self.weekly_budget = budget,
            FieldUpdate::HouseholdSize(size) => self.household_size = size,
            FieldUpdate::TermsAccepted(accepted) => self.terms_accepted = accepted,
        }
    }
}

/// Form field names as used for error keys and at the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    PostalCode,
    SearchRadius,
    DietaryPreference,
    Allergens,
    WeeklyBudget,
    HouseholdSize,
    TermsAccepted,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::PostalCode,
        Field::SearchRadius,
        Field::DietaryPreference,
        Field::Allergens,
        Field::WeeklyBudget,
        Field::HouseholdSize,
        Field::TermsAccepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::PostalCode => "postalCode",
            Field::SearchRadius => "searchRadius",
            Field::DietaryPreference => "dietaryPreference",
            Field::Allergens => "allergens",
            Field::WeeklyBudget => "weeklyBudget",
            Field::HouseholdSize => "householdSize",
            Field::TermsAccepted => "termsAccepted",
        }
    }

    /// Step whose screen shows this field
    pub fn step(&self) -> OnboardingStep {
        match self {
            Field::FirstName | Field::LastName | Field::Email | Field::Password | Field::ConfirmPassword => {
                OnboardingStep::Account
            }
            Field::PostalCode | Field::SearchRadius => OnboardingStep::Location,
            Field::DietaryPreference | Field::Allergens => OnboardingStep::Preferences,
            Field::WeeklyBudget | Field::HouseholdSize | Field::TermsAccepted => OnboardingStep::Budget,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().replace(['_', '-'], "").to_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().to_lowercase() == needle)
            .ok_or_else(|| OnboardingError::UnknownField { field: s.to_string() })
    }
}

/// A single typed edit of the form
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    PostalCode(String),
    SearchRadius(u8),
    DietaryPreference(DietaryPreference),
    Allergens(BTreeSet<Allergen>),
    ToggleAllergen(Allergen),
    WeeklyBudget(u32),
    HouseholdSize(u32),
    TermsAccepted(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::FirstName(_) => Field::FirstName,
            FieldUpdate::LastName(_) => Field::LastName,
            FieldUpdate::Email(_) => Field::Email,
            FieldUpdate::Password(_) => Field::Password,
            FieldUpdate::ConfirmPassword(_) => Field::ConfirmPassword,
            FieldUpdate::PostalCode(_) => Field::PostalCode,
            FieldUpdate::SearchRadius(_) => Field::SearchRadius,
            FieldUpdate::DietaryPreference(_) => Field::DietaryPreference,
            FieldUpdate::Allergens(_) | FieldUpdate::ToggleAllergen(_) => Field::Allergens,
            FieldUpdate::WeeklyBudget(_) => Field::WeeklyBudget,
            FieldUpdate::HouseholdSize(_) => Field::HouseholdSize,
            FieldUpdate::TermsAccepted(_) => Field::TermsAccepted,
        }
    }

    /// Convert a boundary `field`/`raw` pair into a typed update
    ///
    /// Allergens take a comma-separated list; an empty string clears them.
    pub fn parse(field: &str, raw: &str) -> OnboardingResult<Self> {
        let field: Field = field.parse()?;
        let invalid = || OnboardingError::InvalidFieldValue {
            field: field.to_string(),
            value: raw.to_string(),
        };

        let update = match field {
            Field::FirstName => FieldUpdate::FirstName(raw.to_string()),
            Field::LastName => FieldUpdate::LastName(raw.to_string()),
            Field::Email => FieldUpdate::Email(raw.trim().to_string()),
            Field::Password => FieldUpdate::Password(raw.to_string()),
            Field::ConfirmPassword => FieldUpdate::ConfirmPassword(raw.to_string()),
            Field::PostalCode => FieldUpdate::PostalCode(raw.trim().to_string()),
            Field::SearchRadius => {
                let km: u8 = raw.trim().parse().map_err(|_| invalid())?;
                if !(MIN_SEARCH_RADIUS..=MAX_SEARCH_RADIUS).contains(&km) {
                    return Err(invalid());
                }
                FieldUpdate::SearchRadius(km)
            }
            Field::DietaryPreference => FieldUpdate::DietaryPreference(raw.parse().map_err(|_| invalid())?),
            Field::Allergens => FieldUpdate::Allergens(
                raw.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(Allergen::from_str)
                    .collect::<Result<_, _>>()
                    .map_err(|_| invalid())?,
            ),
            Field::WeeklyBudget => FieldUpdate::WeeklyBudget(raw.trim().parse().map_err(|_| invalid())?),
            Field::HouseholdSize => FieldUpdate::HouseholdSize(raw.trim().parse().map_err(|_| invalid())?),
            Field::TermsAccepted => FieldUpdate::TermsAccepted(raw.trim().parse().map_err(|_| invalid())?),
        };
        Ok(update)
    }
}
