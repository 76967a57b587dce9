//! Finalised profile and the welcome screen summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::DietaryPreference;
use std::fmt;
use uuid::Uuid;

use crate::form::OnboardingFormData;

/// Share of the weekly budget the app expects to save
pub const ESTIMATED_SAVINGS_RATE: f64 = 0.15;

/// The record handed to the profile sink when onboarding completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedProfile {
    pub profile_id: Uuid,
    #[serde(rename = "registrationDate")]
    pub registered_at: DateTime<Utc>,
    pub is_onboarded: bool,
    #[serde(flatten)]
    pub data: OnboardingFormData,
}

impl CompletedProfile {
    pub fn new(data: OnboardingFormData) -> Self {
        Self {
            profile_id: Uuid::new_v4(),
            registered_at: Utc::now(),
            is_onboarded: true,
            data,
        }
    }
}

/// Spending band shown next to the weekly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetTier {
    Sparsam,
    Ausgewogen,
    Komfortabel,
    Grosszuegig,
}

impl BudgetTier {
    /// First band whose inclusive range holds `budget`; `Ausgewogen` outside all bands
    pub fn for_budget(budget: u32) -> Self {
        match budget {
            25..=50 => BudgetTier::Sparsam,
            51..=100 => BudgetTier::Ausgewogen,
            101..=150 => BudgetTier::Komfortabel,
            151..=200 => BudgetTier::Grosszuegig,
            _ => BudgetTier::Ausgewogen,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetTier::Sparsam => "Sparsam",
            BudgetTier::Ausgewogen => "Ausgewogen",
            BudgetTier::Komfortabel => "Komfortabel",
            BudgetTier::Grosszuegig => "Großzügig",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole euros saved per week, rounded half up
pub fn estimated_weekly_savings(weekly_budget: u32) -> u32 {
    (f64::from(weekly_budget) * ESTIMATED_SAVINGS_RATE).round() as u32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeSummary {
    pub name: String,
    pub postal_code: String,
    pub search_radius: u8,
    pub dietary_preference: DietaryPreference,
    pub allergen_count: usize,
    pub weekly_budget: u32,
    pub household_size: u32,
    pub estimated_savings: u32,
    pub budget_tier: BudgetTier,
}

impl WelcomeSummary {
    pub fn from_form(form: &OnboardingFormData) -> Self {
        Self {
            name: form.full_name(),
            postal_code: form.postal_code.clone(),
            search_radius: form.search_radius,
            dietary_preference: form.dietary_preference,
            allergen_count: form.allergens.len(),
            weekly_budget: form.weekly_budget,
            household_size: form.household_size,
            estimated_savings: estimated_weekly_savings(form.weekly_budget),
            budget_tier: BudgetTier::for_budget(form.weekly_budget),
        }
    }
}

impl fmt::Display for WelcomeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Willkommen, {}!", self.name)?;
        writeln!(f, "  Standort:   PLZ {} • {} km", self.postal_code, self.search_radius)?;
        writeln!(
            f,
            "  Ernährung:  {} • {} Allergene",
            self.dietary_preference, self.allergen_count
        )?;
        writeln!(
            f,
            "  Budget:     {}€ / Woche ({}) • {} Personen",
            self.weekly_budget, self.budget_tier, self.household_size
        )?;
        write!(f, "  Ersparnis:  ~{}€ pro Woche", self.estimated_savings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_use_first_matching_band() {
        assert_eq!(BudgetTier::for_budget(25), BudgetTier::Sparsam);
        assert_eq!(BudgetTier::for_budget(50), BudgetTier::Sparsam);
        assert_eq!(BudgetTier::for_budget(75), BudgetTier::Ausgewogen);
        assert_eq!(BudgetTier::for_budget(100), BudgetTier::Ausgewogen);
        assert_eq!(BudgetTier::for_budget(150), BudgetTier::Komfortabel);
        assert_eq!(BudgetTier::for_budget(200), BudgetTier::Grosszuegig);
        assert_eq!(BudgetTier::for_budget(10), BudgetTier::Ausgewogen);
        assert_eq!(BudgetTier::for_budget(500), BudgetTier::Ausgewogen);
    }

    #[test]
    fn savings_are_fifteen_percent_rounded() {
        assert_eq!(estimated_weekly_savings(75), 11);
        assert_eq!(estimated_weekly_savings(100), 15);
        assert_eq!(estimated_weekly_savings(10), 2);
    }

    #[test]
    fn profile_serialises_flat_without_passwords() {
        let data = OnboardingFormData {
            first_name: "Anna".to_string(),
            password: "geheim123".to_string(),
            confirm_password: "geheim123".to_string(),
            ..Default::default()
        };
        let profile = CompletedProfile::new(data);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["firstName"], "Anna");
        assert_eq!(json["isOnboarded"], true);
        assert!(json.get("registrationDate").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("confirmPassword").is_none());
    }
}
