//! # Domain Invariants
//!
//! Runtime checks over a contract's persisted state:
//!
//! | Invariant | Meaning |
//! |-----------|---------|
//! | Initialization all-or-none | The three fields exist together or not at all |
//! | Field decodability | Every stored field decodes as its declared type |
//!
//! These hold for any storage only ever touched through committed calls;
//! checking them is how tests prove that aborted calls left no partial
//! writes behind.

use crate::domain::operations::{keys, parse_stored_i32, parse_stored_u32};
use crate::errors::StorageError;
use crate::ports::outbound::ContractStorage;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// All three fields exist iff the constructor has run exactly once.
///
/// # Errors
///
/// Propagates storage backend failures.
pub fn check_initialization_invariant<S: ContractStorage>(
    storage: &S,
) -> Result<bool, StorageError> {
    let present = present_keys(storage)?;
    Ok(present.is_empty() || present.len() == keys::ALL.len())
}

/// Every present field is a fully-decodable encoding of its declared type.
///
/// # Errors
///
/// Propagates storage backend failures.
pub fn check_field_encoding_invariant<S: ContractStorage>(
    storage: &S,
) -> Result<bool, StorageError> {
    Ok(encoding_violations(storage)?.is_empty())
}

/// Checks every invariant at once.
///
/// # Errors
///
/// Propagates storage backend failures.
pub fn check_all_invariants<S: ContractStorage>(
    storage: &S,
) -> Result<InvariantCheckResult, StorageError> {
    let mut violations = Vec::new();

    let present = present_keys(storage)?;
    if !present.is_empty() && present.len() != keys::ALL.len() {
        violations.push(InvariantViolation::PartialInitialization { present });
    }

    violations.extend(encoding_violations(storage)?);

    if violations.is_empty() {
        Ok(InvariantCheckResult::Valid)
    } else {
        Ok(InvariantCheckResult::Invalid(violations))
    }
}

fn present_keys<S: ContractStorage>(storage: &S) -> Result<Vec<&'static str>, StorageError> {
    let mut present = Vec::new();
    for key in keys::ALL {
        if storage.has(key)? {
            present.push(key);
        }
    }
    Ok(present)
}

fn encoding_violations<S: ContractStorage>(
    storage: &S,
) -> Result<Vec<InvariantViolation>, StorageError> {
    let mut violations = Vec::new();

    if let Some(bytes) = storage.get(keys::GREETING)? {
        if std::str::from_utf8(&bytes).is_err() {
            violations.push(InvariantViolation::UndecodableField {
                key: keys::GREETING,
                expected: "string",
            });
        }
    }
    if let Some(bytes) = storage.get(keys::VALUE)? {
        if parse_stored_u32(&bytes).is_err() {
            violations.push(InvariantViolation::UndecodableField {
                key: keys::VALUE,
                expected: "u32",
            });
        }
    }
    if let Some(bytes) = storage.get(keys::COUNTER)? {
        if parse_stored_i32(&bytes).is_err() {
            violations.push(InvariantViolation::UndecodableField {
                key: keys::COUNTER,
                expected: "i32",
            });
        }
    }

    Ok(violations)
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Only part of the constructor's write set exists.
    PartialInitialization {
        /// Which keys were found.
        present: Vec<&'static str>,
    },
    /// A stored field no longer decodes as its declared type.
    UndecodableField {
        /// The offending key.
        key: &'static str,
        /// The declared type.
        expected: &'static str,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PartialInitialization { present } => {
                write!(f, "partial initialization: only {present:?} present")
            }
            Self::UndecodableField { key, expected } => {
                write!(f, "field under {key} does not decode as {expected}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
