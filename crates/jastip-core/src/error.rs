//! Error Types

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Shown when a failure carries no message of its own
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Client error types
///
/// Every kind is surfaced the same way: one visible string in the form's
/// error panel, replacing whatever was there before.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Local check failed before any request was issued
    #[error("{0}")]
    Validation(String),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Request never completed (offline, DNS, CORS, ...)
    #[error("{0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("{0}")]
    Decode(String),

    /// Durable client storage rejected a write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// Build a request error from a status code and extracted message
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// Check if error is retryable
    ///
    /// Nothing retries automatically; this only classifies the failure.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status of a backend rejection, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The string rendered in the error panel
    ///
    /// 4xx and 5xx rejections render identically.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.into()
        } else {
            message
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
