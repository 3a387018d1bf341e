//! Durable token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads by mirroring the bearer token into a
//! single `localStorage` slot. `TokenStore` is the seam between the session
//! manager and that slot so the lifecycle can be exercised natively.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TOKEN_STORAGE_KEY;

/// A single-slot string store that outlives the page.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Replace the persisted token.
    fn save(&self, token: &str);
    /// Remove the persisted token. Clearing an empty slot is a no-op.
    fn clear(&self);
}

/// Browser `localStorage` slot. Outside the browser every read is empty and
/// writes are dropped.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl LocalStorageTokenStore {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = Self::storage()?.get_item(self.key).ok().flatten()?;
            (!raw.is_empty()).then_some(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.key;
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if storage.set_item(self.key, token).is_err() {
                log::warn!("failed to persist auth token");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
