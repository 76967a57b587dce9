//! Core business logic modules
//!
//! Pure step, validation and summary logic with no I/O dependencies.

pub mod step;
pub mod summary;
pub mod validation;

pub use step::{FlowStatus, OnboardingStep};
pub use summary::{estimated_weekly_savings, BudgetTier, CompletedProfile, WelcomeSummary};
pub use validation::{can_proceed, validate_step, ValidationErrors};
