//! # Counter Contract - Unsigned Amount-Based Counter
//!
//! ## Purpose
//!
//! The second contract lineage of the greeter/counter dapp: a single
//! persisted counter stepped by caller-supplied amounts. Where the greeter's
//! counter is signed with free range, this one never goes negative:
//! decrement clamps at zero and increment wraps at the u32 boundary. The
//! two semantics are deliberately kept apart rather than unified.
//!
//! ## Entry Points
//!
//! | Name | Arguments | Effect |
//! |------|-----------|--------|
//! | `init` | none | counter = 0, deployment only |
//! | `increment` | `u32` | counter += amount (wrapping) |
//! | `decrement` | `u32` | counter -= amount (clamped at 0) |
//! | `getValue` | none | returns counter |
//! | `reset` | `u32` | counter = amount |
//! | `getValueWithMessage` | `string` | returns `"{message}: {counter}"` |
//! | `complexOperation` | `string`, `u32`, `u32`, `bool` | pure arithmetic, returns `(u32, string)` |
//!
//! ## Execution Model
//!
//! Same contract family rules as the greeter: one call is one atomic unit
//! of work, serialized by the host, committed all-or-nothing through a
//! staged frame.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::{FixedDeploymentOracle, InMemoryEventLog, InMemoryStorage};
    pub use crate::domain::frame::{CallEffects, CallFrame, StorageWrite};
    pub use crate::domain::operations::keys;
    pub use crate::errors::{CallError, StorageError};
    pub use crate::events::{entry_points, CallRequestPayload, CallResponsePayload};
    pub use crate::ports::inbound::ContractApi;
    pub use crate::ports::outbound::{ContractStorage, DeploymentOracle, EventSink};
    pub use crate::service::{create_test_service, CounterService, EntryPoint, ServiceStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract name, as the host registry knows it.
pub const CONTRACT_NAME: &str = "counter";

// =============================================================================
// TESTS
// =============================================================================
