//! # jastip-core
//!
//! Platform-free core of the JSON (Jastip Online Nasional) web client.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Page controllers                        │
//! │   HomeController   LoginController   RegisterController      │
//! │         │                 │                  │               │
//! │  ┌──────┴─────┐   ┌───────┴──────┐   ┌───────┴──────┐        │
//! │  │ TokenStore │   │   AuthApi    │   │  Navigator   │        │
//! │  └────────────┘   └──────────────┘   └──────────────┘        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three seams are traits so the browser implementations
//! (`localStorage`, `fetch`, the client-side router) can be swapped for the
//! in-memory doubles in tests.

pub mod api;
pub mod error;
pub mod flow;
pub mod form;
pub mod navigation;
pub mod store;

pub use api::{AuthApi, LoginResponse, RawResponse};
pub use error::{AuthError, Result};
pub use flow::{HomeController, LoginController, RegisterController, check_backend};
pub use form::{LoginForm, PasswordVisibility, RegisterForm, SubmitState};
pub use navigation::Navigator;
pub use store::{AUTH_TOKEN_KEY, MemoryTokenStore, TokenStore};
