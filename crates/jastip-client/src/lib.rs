//! # jastip-client
//!
//! HTTP transport for the JSON auth backend.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jastip_client::HttpAuthApi;
//! use jastip_core::{LoginController, LoginForm};
//!
//! let api = HttpAuthApi::from_build_env();
//! LoginController::new(&api, &store, &navigator)
//!     .submit(&LoginForm::new("you@example.com", "secret"))
//!     .await?;
//! ```

pub mod config;
pub mod http;

pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use http::HttpAuthApi;

// Re-export core types for convenience
pub use jastip_core::{AuthApi, AuthError, Result};
