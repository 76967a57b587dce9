//! Navigator that logs hand-overs and remembers them

use std::sync::Mutex;

use shared::{component_info, Component};

use crate::traits::{Navigator, Route};

#[derive(Debug, Default)]
pub struct LoggingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl LoggingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes navigated to so far, oldest first
    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().map(|visited| visited.clone()).unwrap_or_default()
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        component_info!(Component::Onboarding, route = %route, "Navigating");
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_routes_in_order() {
        let navigator = LoggingNavigator::new();
        navigator.navigate(Route::Dashboard);
        navigator.navigate(Route::Recipes);
        assert_eq!(navigator.visited(), vec![Route::Dashboard, Route::Recipes]);
    }
}
