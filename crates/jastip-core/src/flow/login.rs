//! Login page: credentials in, token out.

use crate::api::AuthApi;
use crate::error::Result;
use crate::form::LoginForm;
use crate::navigation::{DASHBOARD, HOME, Navigator, REGISTER};
use crate::store::TokenStore;

/// Login submission protocol
pub struct LoginController<'a> {
    api: &'a dyn AuthApi,
    store: &'a dyn TokenStore,
    navigator: &'a dyn Navigator,
}

impl<'a> LoginController<'a> {
    pub fn new(
        api: &'a dyn AuthApi,
        store: &'a dyn TokenStore,
        navigator: &'a dyn Navigator,
    ) -> Self {
        Self {
            api,
            store,
            navigator,
        }
    }

    /// Post the credentials, persist the returned token and open the
    /// dashboard.
    ///
    /// Nothing is stored and no navigation happens unless the backend
    /// returned a token.
    pub async fn submit(&self, form: &LoginForm) -> Result<()> {
        tracing::info!("Submitting login");

        let response = self.api.login(form).await.inspect_err(|e| {
            tracing::warn!(error = %e, retryable = e.is_retryable(), "Login rejected");
        })?;

        self.store.set(&response.token)?;
        tracing::info!("Login succeeded, token stored");

        self.navigator.push(DASHBOARD);
        Ok(())
    }

    /// "Create an Account" action
    pub fn create_account(&self) {
        self.navigator.push(REGISTER);
    }

    /// "Back to Home" action
    pub fn back_home(&self) {
        self.navigator.push(HOME);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::{LOGIN_FAILED, MockAuthApi, MockCall, MockReply};
    use crate::error::GENERIC_FAILURE;
    use crate::form::SubmitState;
    use crate::navigation::RecordingNavigator;
    use crate::store::{AUTH_TOKEN_KEY, MemoryTokenStore};

    fn form() -> LoginForm {
        LoginForm::new("test@example.com", "password123")
    }

    #[tokio::test]
    async fn test_submit_posts_credentials_once() {
        let api = MockAuthApi::new();
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();

        LoginController::new(&api, &store, &nav)
            .submit(&form())
            .await
            .unwrap();

        assert_eq!(api.calls(), vec![MockCall::Login(form())]);
    }

    #[tokio::test]
    async fn test_success_stores_token_and_navigates() {
        let api = MockAuthApi::new()
            .with_login(MockReply::json(200, &json!({ "token": "mock-token" })));
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();

        LoginController::new(&api, &store, &nav)
            .submit(&form())
            .await
            .unwrap();

        assert_eq!(store.item(AUTH_TOKEN_KEY).as_deref(), Some("mock-token"));
        assert_eq!(nav.visits(), vec![DASHBOARD]);
    }

    #[tokio::test]
    async fn test_rejection_shows_backend_message() {
        let api = MockAuthApi::new()
            .with_login(MockReply::json(401, &json!({ "message": "Invalid credentials" })));
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();
        let mut state = SubmitState::default();

        assert!(state.begin());
        let outcome = LoginController::new(&api, &store, &nav).submit(&form()).await;
        state.settle(outcome);

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Invalid credentials"));
        assert!(nav.visits().is_empty());
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_rejection_without_message() {
        let api = MockAuthApi::new().with_login(MockReply::json(500, &json!({})));
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();

        let err = LoginController::new(&api, &store, &nav)
            .submit(&form())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), LOGIN_FAILED);
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure() {
        let api = MockAuthApi::new().with_login(MockReply::offline("Failed to fetch"));
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();
        let mut state = SubmitState::default();

        state.begin();
        state.settle(LoginController::new(&api, &store, &nav).submit(&form()).await);

        assert_eq!(state.error(), Some("Failed to fetch"));
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_without_message() {
        let api = MockAuthApi::new().with_login(MockReply::offline(""));
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();
        let mut state = SubmitState::default();

        state.begin();
        state.settle(LoginController::new(&api, &store, &nav).submit(&form()).await);

        assert_eq!(state.error(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_secondary_actions() {
        let api = MockAuthApi::new();
        let store = MemoryTokenStore::new();
        let nav = RecordingNavigator::new();
        let login = LoginController::new(&api, &store, &nav);

        login.create_account();
        login.back_home();

        assert_eq!(nav.visits(), vec![REGISTER, HOME]);
        assert_eq!(api.call_count(), 0);
    }
}
