//! Backend API
//!
//! The auth backend is an external system. This module defines the seam the
//! page controllers talk through, plus the response interpretation every
//! transport shares, so an HTTP client only has to move bytes.
//!
//! | Call     | Method | Path          | Success body |
//! |----------|--------|---------------|--------------|
//! | login    | POST   | `/auth/login` | `{token}`    |
//! | register | POST   | `/register`   | any JSON     |
//! | greeting | GET    | `/hello`      | plain text   |

mod mock;

pub use mock::{MockAuthApi, MockCall, MockReply};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AuthError, Result};
use crate::form::{LoginForm, RegisterForm};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/register";
pub const GREETING_PATH: &str = "/hello";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Successful login body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Status and undecoded body of a completed request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Auth backend trait
///
/// Futures are not `Send`: the browser transport runs on the single UI
/// thread.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login` with `{email, password}`
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse>;

    /// `POST /register` with `{username, email, password, confirmPassword}`
    async fn register(&self, form: &RegisterForm) -> Result<()>;

    /// `GET /hello`, returning the body text whatever the status
    async fn greeting(&self) -> Result<String>;
}

/// Interpret a completed login request
pub fn parse_login(response: &RawResponse) -> Result<LoginResponse> {
    if !response.is_success() {
        let message = response
            .json()
            .map_or_else(|_| LOGIN_FAILED.to_string(), |body| login_failure_message(&body));
        return Err(AuthError::request(response.status, message));
    }

    let body = response.json()?;
    match body.get("token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(LoginResponse {
            token: token.to_string(),
        }),
        _ => Err(AuthError::request(response.status, LOGIN_FAILED)),
    }
}

/// Interpret a completed register request
///
/// The body is decoded on every path, success included.
pub fn parse_register(response: &RawResponse) -> Result<()> {
    let body = response.json();
    if response.is_success() {
        body?;
        return Ok(());
    }

    let message = body.map_or_else(
        |_| REGISTRATION_FAILED.to_string(),
        |body| register_failure_message(&body),
    );
    Err(AuthError::request(response.status, message))
}

/// `message` field of a login rejection, or the default
pub fn login_failure_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(LOGIN_FAILED)
        .to_string()
}

/// First entry of a field-error map (or of a list body), or the default
pub fn register_failure_message(body: &Value) -> String {
    let message = match body {
        Value::Object(fields) => fields.values().next().and_then(render_message),
        Value::Array(items) => items.first().and_then(render_message),
        _ => None,
    };
    message.unwrap_or_else(|| REGISTRATION_FAILED.to_string())
}

fn render_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.first().and_then(render_message),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}
