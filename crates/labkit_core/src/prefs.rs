//! Key/value preference storage capability.
//!
//! # Responsibility
//! - Abstract shared-preference style persistence behind a trait so callers
//!   receive the store as an injected capability.
//! - Provide an in-memory implementation usable as a test double.
//!
//! # Invariants
//! - Keys are plain strings; absent keys read as `None`.

use std::collections::BTreeMap;

/// String key/value storage seam for registration and route persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store. The default implementation for tests and the smoke CLI.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: BTreeMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn absent_keys_read_as_none() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn set_then_remove_roundtrip() {
        let mut store = MemoryKeyValueStore::new();
        store.set("phone", "+7 900 000-00-00");
        assert_eq!(store.get("phone").as_deref(), Some("+7 900 000-00-00"));
        store.remove("phone");
        assert!(store.is_empty());
    }
}
