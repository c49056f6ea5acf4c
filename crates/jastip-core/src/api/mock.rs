//! Mock Auth API
//!
//! For testing and offline development. Replies are scripted per call kind
//! and run through the same interpretation as the HTTP transport.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{AuthApi, LoginResponse, RawResponse, parse_login, parse_register};
use crate::error::{AuthError, Result};
use crate::form::{LoginForm, RegisterForm};

/// Scripted outcome of one mock request
#[derive(Clone, Debug)]
pub enum MockReply {
    /// The request completed with this status and body
    Respond(RawResponse),
    /// The request never completed
    Offline(String),
}

impl MockReply {
    pub fn json(status: u16, body: &Value) -> Self {
        Self::Respond(RawResponse::new(status, body.to_string()))
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::Respond(RawResponse::new(status, body))
    }

    pub fn offline(message: impl Into<String>) -> Self {
        Self::Offline(message.into())
    }

    fn complete(&self) -> Result<&RawResponse> {
        match self {
            Self::Respond(response) => Ok(response),
            Self::Offline(message) => Err(AuthError::Network(message.clone())),
        }
    }
}

/// A request the mock received
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
    Login(LoginForm),
    Register(RegisterForm),
    Greeting,
}

/// Mock backend with scripted replies
pub struct MockAuthApi {
    login: MockReply,
    register: MockReply,
    greeting: MockReply,
    calls: Mutex<Vec<MockCall>>,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAuthApi {
    /// Mock where every call succeeds
    pub fn new() -> Self {
        Self {
            login: MockReply::json(200, &json!({ "token": "mock-token" })),
            register: MockReply::json(201, &json!({ "success": true })),
            greeting: MockReply::text(200, "Hello from the JSON backend!"),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_login(mut self, reply: MockReply) -> Self {
        self.login = reply;
        self
    }

    #[must_use]
    pub fn with_register(mut self, reply: MockReply) -> Self {
        self.register = reply;
        self
    }

    #[must_use]
    pub fn with_greeting(mut self, reply: MockReply) -> Self {
        self.greeting = reply;
        self
    }

    /// Every request received so far, oldest first
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn record(&self, call: MockCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse> {
        self.record(MockCall::Login(form.clone()));
        parse_login(self.login.complete()?)
    }

    async fn register(&self, form: &RegisterForm) -> Result<()> {
        self.record(MockCall::Register(form.clone()));
        parse_register(self.register.complete()?)
    }

    async fn greeting(&self) -> Result<String> {
        self.record(MockCall::Greeting);
        Ok(self.greeting.complete()?.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let api = MockAuthApi::new();
        let form = LoginForm::new("a@b.com", "pw");

        let response = api.login(&form).await.unwrap();
        assert_eq!(response.token, "mock-token");
        assert_eq!(api.calls(), vec![MockCall::Login(form)]);
    }

    #[tokio::test]
    async fn test_offline_reply() {
        let api = MockAuthApi::new().with_greeting(MockReply::offline("connection refused"));
        let err = api.greeting().await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(api.call_count(), 1);
    }
}
