//! Home page: token-gated "Explore" routing.

use crate::navigation::{DASHBOARD, LOGIN, Navigator};
use crate::store::TokenStore;

/// Routing decision captured when the home page mounts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeController {
    authenticated: bool,
}

impl HomeController {
    /// Read the stored token once; no network call is made
    pub fn mount(store: &dyn TokenStore) -> Self {
        let authenticated = store.is_authenticated();
        tracing::debug!(authenticated, "Home page mounted");
        Self { authenticated }
    }

    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub const fn explore_target(&self) -> &'static str {
        if self.authenticated { DASHBOARD } else { LOGIN }
    }

    /// "Explore Now" action
    pub fn explore(&self, navigator: &dyn Navigator) {
        navigator.push(self.explore_target());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::store::MemoryTokenStore;

    #[test]
    fn test_explore_without_token_goes_to_login() {
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();

        let home = HomeController::mount(&store);
        home.explore(&nav);

        assert!(!home.is_authenticated());
        assert_eq!(nav.visits(), vec![LOGIN]);
    }

    #[test]
    fn test_explore_with_token_goes_to_dashboard() {
        let store = MemoryTokenStore::with_token("mock-token");
        let nav = RecordingNavigator::new();

        HomeController::mount(&store).explore(&nav);

        assert_eq!(nav.visits(), vec![DASHBOARD]);
    }

    #[test]
    fn test_decision_is_fixed_at_mount() {
        let store = MemoryTokenStore::new();
        let home = HomeController::mount(&store);
        store.set("late-token").unwrap();
        assert_eq!(home.explore_target(), LOGIN);
    }
}
