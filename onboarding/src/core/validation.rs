//! Per-step validation gates

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::step::OnboardingStep;
use crate::form::{Field, OnboardingFormData};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const POSTAL_CODE_LENGTH: usize = 5;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Exactly five ASCII digits
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    postal_code.len() == POSTAL_CODE_LENGTH && postal_code.bytes().all(|b| b.is_ascii_digit())
}

/// Field-level messages shown next to the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    messages: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.messages.remove(&field)
    }

    /// Drop every message belonging to `step`
    pub fn clear_step(&mut self, step: OnboardingStep) {
        self.messages.retain(|field, _| field.step() != step);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.messages.extend(other.messages);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.messages.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, message)| format!("{field}: {message}")).collect();
        f.write_str(&parts.join("; "))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn validate_account(form: &OnboardingFormData, errors: &mut ValidationErrors) {
    if is_blank(&form.first_name) {
        errors.insert(Field::FirstName, "first name is required");
    }
    if is_blank(&form.last_name) {
        errors.insert(Field::LastName, "last name is required");
    }

    if is_blank(&form.email) {
        errors.insert(Field::Email, "email address is required");
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "invalid email address");
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, "password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(Field::Password, "password must be at least 8 characters");
    }

    if form.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, "password confirmation is required");
    } else if form.confirm_password != form.password {
        errors.insert(Field::ConfirmPassword, "passwords do not match");
    }
}

fn validate_location(form: &OnboardingFormData, errors: &mut ValidationErrors) {
    if is_blank(&form.postal_code) {
        errors.insert(Field::PostalCode, "postal code is required");
    } else if !is_valid_postal_code(&form.postal_code) {
        errors.insert(Field::PostalCode, "postal code must be exactly 5 digits");
    }
}

fn validate_budget(form: &OnboardingFormData, errors: &mut ValidationErrors) {
    if form.weekly_budget == 0 {
        errors.insert(Field::WeeklyBudget, "weekly budget must be positive");
    }
    if form.household_size == 0 {
        errors.insert(Field::HouseholdSize, "household size must be positive");
    }
    if !form.terms_accepted {
        errors.insert(Field::TermsAccepted, "terms must be accepted");
    }
}

/// Messages for every failing field of `step`
pub fn validate_step(step: OnboardingStep, form: &OnboardingFormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match step {
        OnboardingStep::Account => validate_account(form, &mut errors),
        OnboardingStep::Location => validate_location(form, &mut errors),
        // The preference is a closed enum with a default, so it is always set
        OnboardingStep::Preferences => {}
        OnboardingStep::Budget => validate_budget(form, &mut errors),
    }
    errors
}

/// True when `step` has no failing field
pub fn can_proceed(step: OnboardingStep, form: &OnboardingFormData) -> bool {
    validate_step(step, form).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str, password: &str, confirm: &str) -> OnboardingFormData {
        OnboardingFormData {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn account_gate_checks_email_and_password() {
        let form = account("bad", "1234567", "1234567");
        let errors = validate_step(OnboardingStep::Account, &form);
        assert_eq!(errors.get(Field::Email), Some("invalid email address"));
        assert_eq!(errors.get(Field::Password), Some("password must be at least 8 characters"));
        assert!(!can_proceed(OnboardingStep::Account, &form));

        let form = account("a@b.de", "12345678", "12345678");
        assert!(can_proceed(OnboardingStep::Account, &form));
    }

    #[test]
    fn confirmation_must_match() {
        let form = account("a@b.de", "12345678", "12345679");
        let errors = validate_step(OnboardingStep::Account, &form);
        assert_eq!(errors.get(Field::ConfirmPassword), Some("passwords do not match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_account_reports_every_required_field() {
        let errors = validate_step(OnboardingStep::Account, &OnboardingFormData::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::FirstName), Some("first name is required"));
    }

    #[test]
    fn email_pattern_matches_common_shapes() {
        assert!(is_valid_email("anna.schmidt@example.de"));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("anna schmidt@example.de"));
        assert!(!is_valid_email("@example.de"));
    }

    #[test]
    fn postal_code_is_exactly_five_digits() {
        assert!(is_valid_postal_code("10115"));
        assert!(!is_valid_postal_code("1011"));
        assert!(!is_valid_postal_code("101155"));
        assert!(!is_valid_postal_code("1011a"));
    }

    #[test]
    fn preferences_always_pass() {
        assert!(can_proceed(OnboardingStep::Preferences, &OnboardingFormData::default()));
    }

    #[test]
    fn budget_gate_requires_terms() {
        let mut form = OnboardingFormData::default();
        let errors = validate_step(OnboardingStep::Budget, &form);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::TermsAccepted]);

        form.terms_accepted = true;
        form.household_size = 0;
        assert_eq!(
            validate_step(OnboardingStep::Budget, &form).get(Field::HouseholdSize),
            Some("household size must be positive")
        );
    }
}
