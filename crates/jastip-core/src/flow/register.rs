//! Register page: local password check, then account creation.

use crate::api::AuthApi;
use crate::error::Result;
use crate::form::RegisterForm;
use crate::navigation::{LOGIN, Navigator, login_after_registration};

/// Registration submission protocol
pub struct RegisterController<'a> {
    api: &'a dyn AuthApi,
    navigator: &'a dyn Navigator,
}

impl<'a> RegisterController<'a> {
    pub fn new(api: &'a dyn AuthApi, navigator: &'a dyn Navigator) -> Self {
        Self { api, navigator }
    }

    /// Validate locally, post the form and send the user to the login page
    /// with the `registered` flag set.
    pub async fn submit(&self, form: &RegisterForm) -> Result<()> {
        if let Err(e) = form.validate() {
            tracing::debug!(error = %e, "Registration blocked locally");
            return Err(e);
        }

        tracing::info!("Submitting registration");
        self.api.register(form).await.inspect_err(|e| {
            tracing::warn!(error = %e, retryable = e.is_retryable(), "Registration rejected");
        })?;

        tracing::info!("Registration succeeded");
        self.navigator.push(&login_after_registration());
        Ok(())
    }

    /// "Back to Login" / "Login Instead" actions
    pub fn back_to_login(&self) {
        self.navigator.push(LOGIN);
    }
}
