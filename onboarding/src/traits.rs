//! Onboarding trait definitions for dependency injection

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::CompletedProfile;
use crate::error::OnboardingResult;

/// Screens the flow can hand over to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Dashboard,
    Offers,
    Recipes,
    ShoppingList,
    StoreLocator,
    Onboarding,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard-home",
            Route::Offers => "/local-offers-browse",
            Route::Recipes => "/recipe-search-filter",
            Route::ShoppingList => "/shopping-list",
            Route::StoreLocator => "/store-map-locator",
            Route::Onboarding => "/user-registration-onboarding",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Persistence for the finalised profile
#[mockall::automock]
pub trait ProfileSink: Send + Sync {
    fn save(&self, profile: &CompletedProfile) -> OnboardingResult<()>;
}

/// Hands control to another screen
#[mockall::automock]
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
