//! HTTP Auth API
//!
//! Implementation of `AuthApi` over `reqwest`. On `wasm32` the same code
//! compiles down to the browser's `fetch`.

use async_trait::async_trait;
use jastip_core::{
    AuthApi, AuthError, LoginForm, LoginResponse, RawResponse, RegisterForm, Result,
    api::{GREETING_PATH, LOGIN_PATH, REGISTER_PATH, parse_login, parse_register},
};
use serde::Serialize;

use crate::config::ApiConfig;

/// Backend client
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Client pointed at the compile-time `API_BASE`
    pub fn from_build_env() -> Self {
        Self::new(ApiConfig::from_build_env())
    }

    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST a JSON body (`Content-Type: application/json`)
    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<RawResponse> {
        let url = self.config.url(path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        read_response(response).await
    }

    async fn get(&self, path: &str) -> Result<RawResponse> {
        let url = self.config.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        read_response(response).await
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse> {
        parse_login(&self.post_json(LOGIN_PATH, form).await?)
    }

    async fn register(&self, form: &RegisterForm) -> Result<()> {
        parse_register(&self.post_json(REGISTER_PATH, form).await?)
    }

    async fn greeting(&self) -> Result<String> {
        Ok(self.get(GREETING_PATH).await?.body)
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(map_transport_error)?;
    tracing::debug!(status, "Response received");
    Ok(RawResponse::new(status, body))
}

/// A request that never produced a readable response
pub fn map_transport_error(err: reqwest::Error) -> AuthError {
    AuthError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn api_for(server: &MockServer) -> HttpAuthApi {
        HttpAuthApi::new(ApiConfig::new(server.uri()).unwrap())
    }

    #[tokio::test]
    async fn test_login_posts_exact_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "email": "test@example.com",
                "password": "password123",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "mock-token" })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let response = api
            .login(&LoginForm::new("test@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(response.token, "mock-token");
    }

    #[tokio::test]
    async fn test_login_rejection_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Wrong password" })),
            )
            .mount(&server)
            .await;

        let err = api_for(&server)
            .login(&LoginForm::new("a@b.com", "nope"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), "Wrong password");
    }

    #[tokio::test]
    async fn test_register_posts_confirm_password() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(json!({
                "username": "testuser",
                "email": "test@example.com",
                "password": "password123",
                "confirmPassword": "password123",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let form = RegisterForm {
            username: "testuser".into(),
            email: "test@example.com".into(),
            password: "password123".into(),
            confirm_password: "password123".into(),
        };
        api_for(&server).register(&form).await.unwrap();
    }

    #[tokio::test]
    async fn test_greeting_returns_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hello"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Hello from Rust!"))
            .mount(&server)
            .await;

        let text = api_for(&server).greeting().await.unwrap();
        assert_eq!(text, "Hello from Rust!");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Nothing listens on port 9 (discard) in the test environment.
        let api = HttpAuthApi::new(ApiConfig::new("http://127.0.0.1:9").unwrap());
        let err = api.greeting().await.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
        assert!(!err.user_message().is_empty());
    }
}
