//! Persisted Key-Value Storage
//!
//! Thin port over the browser's `localStorage` so the controllers can be
//! constructed against an in-memory store in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String-keyed, string-valued storage surviving page reloads.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed storage.
///
/// Every access is individually guarded: an unavailable storage area makes
/// reads behave as absent and drops writes.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage for unit tests.
///
/// Clones share the same backing map, mirroring how two controllers share
/// the one `localStorage` area in the browser.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get("theme"), None);

        storage.set("theme", "dark");
        assert_eq!(storage.get("theme"), Some("dark".to_string()));

        storage.remove("theme");
        assert_eq!(storage.get("theme"), None);
    }

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::default();
        let other = storage.clone();

        storage.set("key", "value");
        assert_eq!(other.get("key"), Some("value".to_string()));
    }
}
