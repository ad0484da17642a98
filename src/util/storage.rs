//! Key/value persistence for client-side preferences and identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write through [`KeyValueStore`] so the same logic runs
//! against `localStorage` in the browser and [`MemoryStore`] in native tests
//! or when storage is unavailable (private mode, disabled cookies).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value persistence. Writes are best-effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory store. Clones share the same map, so a clone models the same
/// browser profile across page loads.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage` wrapper.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
        }
    }
}

/// The browser's `localStorage`, or an in-memory stand-in when it is blocked.
#[cfg(feature = "hydrate")]
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            return Rc::new(LocalStore { storage });
        }
    }
    log::warn!("localStorage unavailable; preferences will not persist");
    Rc::new(MemoryStore::new())
}
