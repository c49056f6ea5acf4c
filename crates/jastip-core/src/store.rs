//! Token Storage
//!
//! Durable key-value storage for the auth token, injected into the
//! page controllers instead of being reached through a global.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AuthError, Result};

/// Storage key holding the token issued at login
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Token store trait
///
/// A failed or empty read is reported as `None`, the same as a token that
/// was never stored.
pub trait TokenStore {
    /// Read the stored token
    fn get(&self) -> Option<String>;

    /// Persist a token, replacing any previous one
    fn set(&self, token: &str) -> Result<()>;

    /// Remove the stored token
    fn clear(&self) -> Result<()>;

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory token store (for development/testing)
#[derive(Default)]
pub struct MemoryTokenStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut items) = store.items.write() {
            items.insert(AUTH_TOKEN_KEY.into(), token.into());
        }
        store
    }

    /// Raw read of any key, as the browser storage would expose it
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.item(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        items.insert(AUTH_TOKEN_KEY.into(), token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        items.remove(AUTH_TOKEN_KEY);
        Ok(())
    }
}
