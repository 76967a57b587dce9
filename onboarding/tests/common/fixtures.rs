//! Test fixtures and builders for onboarding tests

use onboarding::traits::{MockNavigator, MockProfileSink};
use onboarding::{FieldUpdate, Onboarding, OnboardingStep};

pub struct TestFixtures;

impl TestFixtures {
    pub const EMAIL: &'static str = "anna.schmidt@example.de";
    pub const PASSWORD: &'static str = "sicher123";
    pub const POSTAL_CODE: &'static str = "10115";

    /// Edits that satisfy the account step
    pub fn account_updates() -> Vec<FieldUpdate> {
        vec![
            FieldUpdate::FirstName("Anna".to_string()),
            FieldUpdate::LastName("Schmidt".to_string()),
            FieldUpdate::Email(Self::EMAIL.to_string()),
            FieldUpdate::Password(Self::PASSWORD.to_string()),
            FieldUpdate::ConfirmPassword(Self::PASSWORD.to_string()),
        ]
    }
}

/// Builder for flows with mocked collaborators
pub struct FlowBuilder {
    sink: MockProfileSink,
    navigator: MockNavigator,
}

impl FlowBuilder {
    pub fn new() -> Self {
        Self {
            sink: MockProfileSink::new(),
            navigator: MockNavigator::new(),
        }
    }

    pub fn with_sink(mut self, sink: MockProfileSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_navigator(mut self, navigator: MockNavigator) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn build(self) -> Onboarding<MockProfileSink, MockNavigator> {
        Onboarding::new(self.sink, self.navigator)
    }

    /// Flow filled in and advanced to the budget step, terms not yet accepted
    pub fn build_at_budget_step(self) -> Onboarding<MockProfileSink, MockNavigator> {
        let mut flow = self.build();
        for update in TestFixtures::account_updates() {
            flow.update(update).unwrap();
        }
        flow.next().unwrap();
        flow.update(FieldUpdate::PostalCode(TestFixtures::POSTAL_CODE.to_string()))
            .unwrap();
        flow.next().unwrap();
        flow.next().unwrap();
        assert_eq!(flow.current_step(), OnboardingStep::Budget);
        flow
    }
}
