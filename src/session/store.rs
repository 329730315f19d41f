//! Durable client-side token storage.
//!
//! Two fixed localStorage keys hold the bearer token pair. No expiry
//! metadata is stored; token validity is only ever established by calling
//! the backend. All browser access is gated behind the `hydrate` feature;
//! outside the browser every read returns `None` and writes are no-ops.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Storage seam for the session token pair.
///
/// The sole source of truth for "is a session present". `clear` must be
/// idempotent.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Persist both tokens of a new session.
    fn save(&self, access: &str, refresh: &str);
    /// Replace only the access token, keeping the refresh token.
    fn set_access_token(&self, access: &str);
    /// Remove both tokens.
    fn clear(&self);
}

/// Token storage backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
pub(crate) fn storage_get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(feature = "hydrate")]
pub(crate) fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

impl TokenStore for BrowserTokens {
    fn access_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage_get(ACCESS_TOKEN_KEY)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn refresh_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage_get(REFRESH_TOKEN_KEY)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, access: &str, refresh: &str) {
        #[cfg(feature = "hydrate")]
        {
            storage_set(ACCESS_TOKEN_KEY, access);
            storage_set(REFRESH_TOKEN_KEY, refresh);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access, refresh);
        }
    }

    fn set_access_token(&self, access: &str) {
        #[cfg(feature = "hydrate")]
        {
            storage_set(ACCESS_TOKEN_KEY, access);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            storage_remove(ACCESS_TOKEN_KEY);
            storage_remove(REFRESH_TOKEN_KEY);
        }
    }
}

/// In-memory token storage for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokens {
    map: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryTokens {
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let store = Self::default();
        store.save(access, refresh);
        store
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.map.borrow().get(ACCESS_TOKEN_KEY).cloned()
    }

    fn refresh_token(&self) -> Option<String> {
        self.map.borrow().get(REFRESH_TOKEN_KEY).cloned()
    }

    fn save(&self, access: &str, refresh: &str) {
        let mut map = self.map.borrow_mut();
        map.insert(ACCESS_TOKEN_KEY.to_owned(), access.to_owned());
        map.insert(REFRESH_TOKEN_KEY.to_owned(), refresh.to_owned());
    }

    fn set_access_token(&self, access: &str) {
        self.map
            .borrow_mut()
            .insert(ACCESS_TOKEN_KEY.to_owned(), access.to_owned());
    }

    fn clear(&self) {
        let mut map = self.map.borrow_mut();
        map.remove(ACCESS_TOKEN_KEY);
        map.remove(REFRESH_TOKEN_KEY);
    }
}
