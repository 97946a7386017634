//! Implements a store that keeps slots in memory.

use std::{collections::HashMap, sync::Mutex};

use crate::stores::{KeyValueStore, StoreError};

/// Keeps slots in a hash map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let slots = self.slots.lock().map_err(|_| StoreError::LockPoisoned)?;

        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.slots
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?
            .insert(key.to_owned(), value.to_vec());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::stores::{KeyValueStore, MemoryStore};

    #[test]
    fn missing_slot_is_none() {
        let store = MemoryStore::new();

        assert_eq!(store.load("missing").unwrap(), None);
    }

    #[test]
    fn save_overwrites_slot() {
        let store = MemoryStore::new();

        store.save("key", b"first").unwrap();
        store.save("key", b"second").unwrap();

        assert_eq!(store.load("key").unwrap(), Some(b"second".to_vec()));
    }
}
