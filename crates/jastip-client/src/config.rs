//! Backend location
//!
//! The browser bundle cannot read the environment at runtime, so `API_BASE`
//! is captured when the client is compiled.

use jastip_core::{AuthError, Result};
use reqwest::Url;

/// Environment variable naming the backend base URL
pub const API_BASE_VAR: &str = "API_BASE";

/// Used when `API_BASE` is unset or invalid
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Backend configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.into(),
        }
    }
}

impl ApiConfig {
    /// Validate and normalize a base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        let url = Url::parse(trimmed).map_err(|e| {
            AuthError::Config(format!("{API_BASE_VAR} is not a valid URL ({e}): {base_url:?}"))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AuthError::Config(format!(
                "{API_BASE_VAR} must be an http(s) URL, got {base_url:?}"
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Configuration baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("API_BASE"))
    }

    /// Configuration from an optional raw value, falling back to the default
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        Self::new(value).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to {DEFAULT_API_BASE}");
            Self::default()
        })
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
