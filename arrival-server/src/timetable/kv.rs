//! Key/value storage for schedule records.

use std::collections::HashMap;

/// Minimal key/value storage the schedule store writes through.
///
/// Values are opaque to the store. There is no update or delete: a key, once
/// set, keeps its value for the life of the store.
pub trait KeyValueStore<V> {
    /// Insert `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the value was inserted.
    fn set_if_absent(&mut self, key: String, value: V) -> bool;

    /// Look up the value stored under `key`.
    fn get(&self, key: &str) -> Option<&V>;

    /// Whether `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All keys currently stored, in no particular order.
    fn keys(&self) -> Vec<String>;
}

/// In-memory [`KeyValueStore`] backed by a `HashMap`.
#[derive(Debug, Clone)]
pub struct MemoryStore<V> {
    entries: HashMap<String, V>,
}

impl<V> MemoryStore<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KeyValueStore<V> for MemoryStore<V> {
    fn set_if_absent(&mut self, key: String, value: V) -> bool {
        match self.entries.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        assert!(store.set_if_absent("line-1".to_string(), "newvalue"));
        assert_eq!(store.get("line-1"), Some(&"newvalue"));
        assert!(store.contains("line-1"));
    }

    #[test]
    fn second_set_is_rejected() {
        let mut store = MemoryStore::new();
        assert!(store.set_if_absent("line-1".to_string(), "first"));
        assert!(!store.set_if_absent("line-1".to_string(), "second"));
        assert_eq!(store.get("line-1"), Some(&"first"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_missing_key() {
        let store: MemoryStore<u32> = MemoryStore::new();
        assert_eq!(store.get("line-none"), None);
        assert!(!store.contains("line-none"));
    }

    #[test]
    fn keys_of_empty_store() {
        let store: MemoryStore<u32> = MemoryStore::default();
        assert!(store.is_empty());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn keys_lists_everything() {
        let mut store = MemoryStore::new();
        store.set_if_absent("line-1".to_string(), 1);
        store.set_if_absent("line-2".to_string(), 2);

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec!["line-1", "line-2"]);
    }
}
