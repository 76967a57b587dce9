//! Registration wizard state machine
//!
//! Owns the form data, the current step and the displayed validation
//! messages. Persistence and navigation are injected collaborators.

use shared::{component_debug, component_info, component_warn, logging, Component};

use crate::core::{validate_step, CompletedProfile, FlowStatus, OnboardingStep, ValidationErrors, WelcomeSummary};
use crate::error::{OnboardingError, OnboardingResult};
use crate::form::{FieldUpdate, OnboardingFormData};
use crate::traits::{Navigator, ProfileSink, Route};

pub struct Onboarding<S, N>
where
    S: ProfileSink,
    N: Navigator,
{
    form: OnboardingFormData,
    step: OnboardingStep,
    status: FlowStatus,
    errors: ValidationErrors,
    profile: Option<CompletedProfile>,
    entered: bool,

    /// Injected services
    sink: S,
    navigator: N,
}

impl<S, N> Onboarding<S, N>
where
    S: ProfileSink,
    N: Navigator,
{
    /// Start at step 1 with default form data
    pub fn new(sink: S, navigator: N) -> Self {
        Self::with_form(OnboardingFormData::default(), sink, navigator)
    }

    pub fn with_form(form: OnboardingFormData, sink: S, navigator: N) -> Self {
        Self {
            form,
            step: OnboardingStep::FIRST,
            status: FlowStatus::InProgress,
            errors: ValidationErrors::new(),
            profile: None,
            entered: false,
            sink,
            navigator,
        }
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.step
    }

    pub fn form_data(&self) -> &OnboardingFormData {
        &self.form
    }

    /// Messages currently displayed next to the inputs
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> FlowStatus {
        self.status
    }

    pub fn profile(&self) -> Option<&CompletedProfile> {
        self.profile.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn ensure_in_progress(&self) -> OnboardingResult<()> {
        if self.status.is_finished() {
            return Err(OnboardingError::FlowFinished);
        }
        Ok(())
    }

    /// Apply a field edit and clear that field's message
    pub fn update(&mut self, update: FieldUpdate) -> OnboardingResult<()> {
        self.ensure_in_progress()?;
        let field = update.field();
        self.errors.remove(field);
        self.form.apply(update);
        component_debug!(Component::Onboarding, field = %field, step = %self.step, "Field updated");
        Ok(())
    }

    /// Parse and apply a boundary `field`/`value` pair
    pub fn set(&mut self, field: &str, value: &str) -> OnboardingResult<()> {
        let update = FieldUpdate::parse(field, value)?;
        self.update(update)
    }

    /// Whether the current step's gate passes for the current form data
    pub fn can_proceed(&self) -> bool {
        !self.status.is_finished() && validate_step(self.step, &self.form).is_empty()
    }

    /// Validate the current step and record its messages for display
    fn gate(&mut self) -> OnboardingResult<()> {
        let errors = validate_step(self.step, &self.form);
        self.errors.clear_step(self.step);
        if errors.is_empty() {
            return Ok(());
        }
        self.errors.extend(errors.clone());
        component_debug!(
            Component::Onboarding,
            step = %self.step,
            failing = errors.len(),
            "Step gate rejected"
        );
        Err(OnboardingError::CannotProceed { step: self.step, errors })
    }

    /// Advance one step if the current step validates
    pub fn next(&mut self) -> OnboardingResult<OnboardingStep> {
        self.ensure_in_progress()?;
        let target = self.step.next().ok_or(OnboardingError::AtLastStep)?;
        self.gate()?;

        let from = self.step;
        self.step = target;
        component_info!(Component::Onboarding, from = %from, to = %target, "Moved to next step");
        Ok(target)
    }

    /// Go back one step; stays put at the first step
    pub fn previous(&mut self) -> OnboardingResult<OnboardingStep> {
        self.ensure_in_progress()?;
        if let Some(target) = self.step.previous() {
            self.errors.clear_step(self.step);
            let from = self.step;
            self.step = target;
            component_info!(Component::Onboarding, from = %from, to = %target, "Moved to previous step");
        }
        Ok(self.step)
    }

    /// Abandon the flow with defaults and leave for the dashboard
    pub fn skip(&mut self) -> OnboardingResult<()> {
        self.ensure_in_progress()?;
        self.status = FlowStatus::Skipped;
        self.errors.clear();
        component_info!(Component::Onboarding, step = %self.step, "Onboarding skipped");
        self.navigator.navigate(Route::Dashboard);
        Ok(())
    }

    /// Finalise from the last step and hand the profile to the sink
    ///
    /// A sink failure leaves the flow in progress at the last step.
    pub fn complete(&mut self) -> OnboardingResult<&CompletedProfile> {
        self.ensure_in_progress()?;
        if !self.step.is_last() {
            return Err(OnboardingError::NotAtLastStep { step: self.step });
        }
        self.gate()?;

        let profile = CompletedProfile::new(self.form.clone());
        if let Err(e) = self.sink.save(&profile) {
            logging::log_error(Component::Onboarding, "Saving profile", &e);
            return Err(OnboardingError::Persistence { message: e.to_string() });
        }

        component_info!(
            Component::Onboarding,
            profile_id = %profile.profile_id,
            "Onboarding completed"
        );
        self.status = FlowStatus::Complete;
        Ok(self.profile.insert(profile))
    }

    /// Summary for the welcome screen; only after completion
    pub fn welcome_summary(&self) -> OnboardingResult<WelcomeSummary> {
        match (&self.status, &self.profile) {
            (FlowStatus::Complete, Some(profile)) => Ok(WelcomeSummary::from_form(&profile.data)),
            _ => Err(OnboardingError::NotComplete),
        }
    }

    /// Leave the welcome screen for the dashboard, once
    pub fn enter_app(&mut self) -> OnboardingResult<()> {
        if self.status != FlowStatus::Complete {
            return Err(OnboardingError::NotComplete);
        }
        if self.entered {
            component_warn!(Component::Onboarding, "Welcome screen already left");
            return Err(OnboardingError::FlowFinished);
        }
        self.entered = true;
        self.navigator.navigate(Route::Dashboard);
        logging::log_success(Component::Onboarding, "Entered app after onboarding");
        Ok(())
    }
}
