//! Form State
//!
//! Page-scoped form data and the submit state machine shared by the
//! login and register pages.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

/// Error shown when the two register passwords differ
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Login form fields
///
/// Serializes to exactly `{"email", "password"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Register form fields
///
/// Serializes to `{"username", "email", "password", "confirmPassword"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Local check run before any request is issued
    pub fn validate(&self) -> Result<()> {
        if self.password != self.confirm_password {
            return Err(AuthError::Validation(PASSWORD_MISMATCH.into()));
        }
        Ok(())
    }
}

/// Lifecycle of one form submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    /// Enter `Submitting`, clearing any previous error.
    ///
    /// Returns `false` without touching the state when a submission is
    /// already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Leave `Submitting` with the outcome of the submission
    pub fn settle(&mut self, outcome: Result<()>) {
        *self = match outcome {
            Ok(()) => Self::Succeeded,
            Err(err) => Self::Failed(err.user_message()),
        };
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Message for the error panel, if the last submission failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Show/hide toggle for password inputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordVisibility(bool);

impl PasswordVisibility {
    pub const fn toggle(self) -> Self {
        Self(!self.0)
    }

    pub const fn is_visible(self) -> bool {
        self.0
    }

    /// HTML `type` attribute for the password input
    pub const fn input_type(self) -> &'static str {
        if self.0 { "text" } else { "password" }
    }
}
