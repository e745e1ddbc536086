//! # Greeter Contract - Storage-Backed State Machine
//!
//! ## Purpose
//!
//! The on-chain core of the greeter dapp: three persisted fields (a greeting
//! string, an unsigned value, a signed counter) manipulated through typed,
//! positionally-encoded call arguments inside a deterministic execution
//! environment. The host VM, the storage backend, and the event-log
//! transport are external collaborators behind ports.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Fields exist all together or not at all, written once at deployment | `domain/operations.rs` constructor guards, `domain/invariants.rs` |
//! | Value is never negative; Counter may be | stored-type parsing in `domain/operations.rs` |
//! | A call commits every staged write or none | `domain/frame.rs` + `service.rs` commit |
//! | Aborted calls emit no events | event buffering in `domain/frame.rs` |
//!
//! ## Execution Model
//!
//! One call is one atomic unit of work. The host serializes all calls
//! touching one contract's storage, so everything here is synchronous and
//! single-writer; no locking is layered on top of that guarantee.
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Operations | `domain/operations.rs` | Entry-point bodies over staged storage |
//! | Call frame | `domain/frame.rs` | Per-call stage, committed all-or-nothing |
//! | Dispatcher | `service.rs` | Name-to-operation mapping, commit, stats |
//! | Ports | `ports/` | Storage, event sink, deployment oracle, call API |
//! | Adapters | `adapters/` | In-memory collaborators for tests/harnesses |
//! | Envelopes | `events.rs` | Serde call request/response payloads |
//!
//! ## Usage Example
//!
//! ```
//! use contract_abi::ArgsWriter;
//! use greeter_contract::prelude::*;
//!
//! let mut service = create_test_service(ServiceConfig::default());
//!
//! let args = ArgsWriter::new()
//!     .add_string("hello")
//!     .add_u32(5)
//!     .add_i32(-3)
//!     .into_bytes();
//! service.call(entry_points::CONSTRUCTOR, &args).unwrap();
//! service.oracle_mut().set_deploying(false);
//!
//! assert_eq!(service.call(entry_points::GREET, &[]).unwrap(), b"hello");
//! ```

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
    // Domain
    pub use crate::domain::entities::{CallEffects, CounterSemantics, StorageWrite};
    pub use crate::domain::frame::CallFrame;
    pub use crate::domain::invariants::{
        check_all_invariants, check_field_encoding_invariant, check_initialization_invariant,
        InvariantCheckResult, InvariantViolation,
    };
    pub use crate::domain::operations::keys;

    // Ports
    pub use crate::ports::inbound::ContractApi;
    pub use crate::ports::outbound::{ContractStorage, DeploymentOracle, EventSink};

    // Envelopes
    pub use crate::events::{entry_points, CallRequestPayload, CallResponsePayload};

    // Errors
    pub use crate::errors::{CallError, StorageError};

    // Adapters
    pub use crate::adapters::{FixedDeploymentOracle, InMemoryEventLog, InMemoryStorage};

    // Service
    pub use crate::service::{
        create_test_service, EntryPoint, GreeterService, ServiceConfig, ServiceStats,
    };
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract name, as the host registry knows it.
pub const CONTRACT_NAME: &str = "greeter";

// =============================================================================
// TESTS
// =============================================================================
