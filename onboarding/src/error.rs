//! Onboarding-specific error types

use thiserror::Error;

use crate::core::{OnboardingStep, ValidationErrors};

#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Cannot leave step {step}: {errors}")]
    CannotProceed { step: OnboardingStep, errors: ValidationErrors },

    #[error("Already at the last step")]
    AtLastStep,

    #[error("Onboarding can only be completed from the last step, currently at {step}")]
    NotAtLastStep { step: OnboardingStep },

    #[error("Onboarding has already finished")]
    FlowFinished,

    #[error("Onboarding has not been completed")]
    NotComplete,

    #[error("Invalid value for {field}: {value:?}")]
    InvalidFieldValue { field: String, value: String },

    #[error("Unknown form field: {field}")]
    UnknownField { field: String },

    #[error("Failed to persist profile: {message}")]
    Persistence { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OnboardingResult<T> = Result<T, OnboardingError>;
