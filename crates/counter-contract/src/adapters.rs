//! # Adapters
//!
//! In-memory implementations of the outbound ports for tests and call
//! harnesses. Production adapters belong to the host runtime.

use std::collections::BTreeMap;

use crate::errors::StorageError;
use crate::ports::outbound::{ContractStorage, DeploymentOracle, EventSink};

// =============================================================================
// STORAGE
// =============================================================================

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

    /// Snapshot for before/after comparisons in tests.
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
// EVENT LOG
// =============================================================================

/// Append-only in-memory event log.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventLog {
    entries: Vec<String>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All appended events, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of appended events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventSink for InMemoryEventLog {
    fn append(&mut self, event: String) {
        self.entries.push(event);
    }
}

// =============================================================================
// DEPLOYMENT ORACLE
// =============================================================================

/// Deployment predicate with an explicitly set answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDeploymentOracle {
    deploying: bool,
}

impl FixedDeploymentOracle {
    /// Creates an oracle with the given answer.
    #[must_use]
    pub fn new(deploying: bool) -> Self {
        Self { deploying }
    }

    /// Changes the answer.
    pub fn set_deploying(&mut self, deploying: bool) {
        self.deploying = deploying;
    }
}

impl Default for FixedDeploymentOracle {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DeploymentOracle for FixedDeploymentOracle {
    fn is_deploying(&self) -> bool {
        self.deploying
    }
}

// =============================================================================
// TESTS
// =============================================================================
