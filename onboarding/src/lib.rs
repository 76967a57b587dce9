//! Onboarding library for the sparkoch grocery-savings app
//!
//! A four-step registration wizard (account, location, preferences, budget)
//! with per-step validation gates, bidirectional navigation, early skip and
//! a terminal completion that hands the finalised profile to a sink.

pub mod core;
pub mod error;
pub mod flow;
pub mod form;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    can_proceed, validate_step, BudgetTier, CompletedProfile, FlowStatus, OnboardingStep, ValidationErrors,
    WelcomeSummary,
};
pub use error::{OnboardingError, OnboardingResult};
pub use flow::Onboarding;
pub use form::{Field, FieldUpdate, OnboardingFormData};
pub use services::{LocalStorageSink, LoggingNavigator, USER_KEY};
pub use traits::{Navigator, ProfileSink, Route};
