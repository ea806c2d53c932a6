//! Persisted session entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token and member survive reloads in `localStorage`. Access
//! goes through [`SessionStorage`] so the session store can be exercised
//! natively against an in-memory map.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a missing window, disabled storage, or a
//! quota error degrades to "nothing persisted" rather than an error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding the raw API token.
pub const TOKEN_KEY: &str = "authToken";
/// Key holding the JSON-serialized [`crate::net::types::Member`].
pub const MEMBER_KEY: &str = "authMember";

/// String key/value persistence for session entries.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Every operation no-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    leptos::logging::warn!("localStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Read the persisted token, if any. Used to authorize outgoing requests.
pub fn stored_token() -> Option<String> {
    BrowserStorage.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;
