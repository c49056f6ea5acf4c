//! Client-side navigation targets and the navigator seam.

use std::sync::Mutex;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const STATUS: &str = "/status";

/// Query flag appended to the login route after a successful registration.
///
/// Nothing reads it yet; the login page renders the same either way.
pub const REGISTERED_QUERY: &str = "registered=true";

/// Login route carrying the registration flag
pub fn login_after_registration() -> String {
    format!("{LOGIN}?{REGISTERED_QUERY}")
}

/// Pushes a new entry onto the client-side history
pub trait Navigator {
    fn push(&self, path: &str);
}

/// Navigator that only remembers where it was sent (for testing)
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path pushed so far, oldest first
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.visits().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(path.to_string());
        }
    }
}
