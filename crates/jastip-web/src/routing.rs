//! Router-backed navigator.

use jastip_core::Navigator;
use leptos_router::NavigateOptions;

/// Pushes paths through the client-side router's `navigate` function
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    /// Wrap the function returned by `leptos_router::hooks::use_navigate`
    pub const fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn push(&self, path: &str) {
        tracing::debug!(path, "Navigating");
        (self.navigate)(path, NavigateOptions::default());
    }
}
