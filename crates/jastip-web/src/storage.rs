//! Browser `localStorage` token store.

use jastip_core::{AUTH_TOKEN_KEY, AuthError, Result, TokenStore};
use web_sys::Storage;

/// Token store over `window.localStorage`
///
/// Missing storage (private mode, no window) reads as "no token".
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn storage_or_err() -> Result<Storage> {
    local_storage().ok_or_else(|| AuthError::Storage("localStorage is unavailable".into()))
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?
            .get_item(AUTH_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<()> {
        storage_or_err()?
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|e| AuthError::Storage(format!("{e:?}")))
    }

    fn clear(&self) -> Result<()> {
        storage_or_err()?
            .remove_item(AUTH_TOKEN_KEY)
            .map_err(|e| AuthError::Storage(format!("{e:?}")))
    }
}
