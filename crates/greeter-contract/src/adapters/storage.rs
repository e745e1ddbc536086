//! # In-Memory Storage Adapter
//!
//! Map-backed contract storage for tests and harnesses. The production
//! storage lives in the host runtime behind the same port.

use std::collections::BTreeMap;

use crate::errors::StorageError;
use crate::ports::outbound::ContractStorage;

/// In-memory key-to-bytes store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorage {
    entries: BTreeMap<String, Vec<u8>>,
}

impl InMemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the whole store, for before/after comparisons in tests.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.entries.clone()
    }
}

impl ContractStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entries.contains_key(key))
    }
}

// =============================================================================
// TESTS
// =============================================================================
