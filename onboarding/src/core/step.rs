//! Wizard steps and flow status

use std::fmt;

use serde::{Deserialize, Serialize};

/// One screen of the registration wizard, numbered 1 to 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OnboardingStep {
    Account = 1,
    Location = 2,
    Preferences = 3,
    Budget = 4,
}

impl OnboardingStep {
    pub const FIRST: OnboardingStep = OnboardingStep::Account;
    pub const LAST: OnboardingStep = OnboardingStep::Budget;
    pub const COUNT: u8 = 4;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(OnboardingStep::Account),
            2 => Some(OnboardingStep::Location),
            3 => Some(OnboardingStep::Preferences),
            4 => Some(OnboardingStep::Budget),
            _ => None,
        }
    }

    /// Following step; `None` at the last step
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Preceding step; `None` at the first step
    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::Account => "Account",
            OnboardingStep::Location => "Location",
            OnboardingStep::Preferences => "Preferences",
            OnboardingStep::Budget => "Budget",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.number(), Self::COUNT, self.title())
    }
}

/// Lifecycle of the flow; only `InProgress` accepts edits and navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowStatus {
    InProgress,
    /// Completed and persisted; the welcome summary is available
    Complete,
    /// Abandoned early with defaults
    Skipped,
}

impl FlowStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, FlowStatus::InProgress)
    }
}
