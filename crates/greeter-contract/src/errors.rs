//! # Error Types
//!
//! Failure taxonomy for greeter contract calls. Every error aborts the whole
//! call: no staged write is committed and no event is appended. Retries are
//! the caller's concern, never the contract's.

use contract_abi::ArgsError;
use thiserror::Error;

// =============================================================================
// STORAGE ERRORS
// =============================================================================

/// Errors from contract storage access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A read hit a key the constructor has not written yet.
    #[error("read of uninitialized storage key: {key}")]
    MissingKey {
        /// The key that was read.
        key: &'static str,
    },

    /// Stored bytes no longer decode as the field's declared type.
    #[error("stored field under key {key} is not a valid {expected}")]
    Corrupted {
        /// The key whose value is undecodable.
        key: &'static str,
        /// The declared field type.
        expected: &'static str,
    },

    /// The storage backend refused the operation.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// CALL ERRORS
// =============================================================================

/// Errors that abort a contract call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The argument buffer could not be decoded.
    #[error(transparent)]
    Args(#[from] ArgsError),

    /// Contract storage failed or held an invalid field.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The constructor ran outside a deployment context, or ran twice.
    #[error("precondition violation: {reason}")]
    PreconditionViolation {
        /// Which precondition failed.
        reason: String,
    },

    /// The call named an entry point the contract does not export.
    #[error("unknown entry point: {name}")]
    UnknownEntryPoint {
        /// The name the caller asked for.
        name: String,
    },
}

impl CallError {
    /// Returns true for the deployment-precondition failures.
    #[must_use]
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::PreconditionViolation { .. })
    }

    /// Returns true when the argument buffer was too short.
    #[must_use]
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::Args(ArgsError::MissingArgument { .. }))
    }
}

// =============================================================================
// TESTS
// =============================================================================
