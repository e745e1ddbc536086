//! # Contract Service
//!
//! The entry-point dispatcher. Maps one inbound call (entry point name plus
//! argument buffer) to exactly one state-machine operation, runs it against
//! a staged frame, and commits everything or nothing.
//!
//! The host serializes calls against one contract's storage, so the service
//! is synchronous and single-writer by construction; it adds no locking of
//! its own.

use tracing::{debug, instrument, warn};

use crate::adapters::{FixedDeploymentOracle, InMemoryEventLog, InMemoryStorage};
use crate::domain::entities::{CallEffects, CounterSemantics};
use crate::domain::frame::CallFrame;
use crate::domain::operations;
use crate::errors::CallError;
use crate::events::{entry_points, CallRequestPayload, CallResponsePayload};
use crate::ports::inbound::ContractApi;
use crate::ports::outbound::{ContractStorage, DeploymentOracle, EventSink};
use serde::{Deserialize, Serialize};

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// The contract's exported operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPoint {
    /// One-time initialization at deployment.
    Constructor,
    /// Read the greeting.
    Greet,
    /// Overwrite the greeting.
    SetGreeting,
    /// Read the value.
    GetValue,
    /// Overwrite the value.
    SetValue,
    /// Read the counter.
    GetCounter,
    /// Step the counter up.
    Increment,
    /// Step the counter down.
    Decrement,
}

impl EntryPoint {
    /// Resolves an exported name, or None for anything the contract does
    /// not export.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            entry_points::CONSTRUCTOR => Some(Self::Constructor),
            entry_points::GREET => Some(Self::Greet),
            entry_points::SET_GREETING => Some(Self::SetGreeting),
            entry_points::GET_VALUE => Some(Self::GetValue),
            entry_points::SET_VALUE => Some(Self::SetValue),
            entry_points::GET_COUNTER => Some(Self::GetCounter),
            entry_points::INCREMENT => Some(Self::Increment),
            entry_points::DECREMENT => Some(Self::Decrement),
            _ => None,
        }
    }

    /// The exported name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Constructor => entry_points::CONSTRUCTOR,
            Self::Greet => entry_points::GREET,
            Self::SetGreeting => entry_points::SET_GREETING,
            Self::GetValue => entry_points::GET_VALUE,
            Self::SetValue => entry_points::SET_VALUE,
            Self::GetCounter => entry_points::GET_COUNTER,
            Self::Increment => entry_points::INCREMENT,
            Self::Decrement => entry_points::DECREMENT,
        }
    }
}

// =============================================================================
// CONFIGURATION & STATISTICS
// =============================================================================

/// Contract service configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Counter boundary behavior for this deployment.
    pub counter_semantics: CounterSemantics,
}

/// Statistics over the service's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Calls received, committed or not.
    pub calls_handled: u64,
    /// Calls that committed.
    pub committed_calls: u64,
    /// Calls that aborted.
    pub aborted_calls: u64,
    /// Events appended to the sink.
    pub events_emitted: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The greeter contract bound to its host collaborators.
///
/// Owns the storage, event sink, and deployment oracle for one deployed
/// instance; harnesses reach them through the accessors instead of any
/// ambient global state.
pub struct GreeterService<S: ContractStorage, E: EventSink, D: DeploymentOracle> {
    config: ServiceConfig,
    storage: S,
    events: E,
    oracle: D,
    stats: ServiceStats,
}

impl<S: ContractStorage, E: EventSink, D: DeploymentOracle> GreeterService<S, E, D> {
    /// Binds a service to its collaborators.
    pub fn new(storage: S, events: E, oracle: D, config: ServiceConfig) -> Self {
        Self {
            config,
            storage,
            events,
            oracle,
            stats: ServiceStats::default(),
        }
    }

    /// The bound storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The bound event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// The bound deployment oracle, mutable so a harness can close the
    /// deployment window.
    pub fn oracle_mut(&mut self) -> &mut D {
        &mut self.oracle
    }

    /// The active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Lifetime statistics.
    pub fn stats(&self) -> &ServiceStats {
        &self.stats
    }

    /// Handles one call envelope.
    ///
    /// Never fails outward: an aborted call becomes a response with
    /// `success == false` and the diagnostic string, exactly what the host
    /// reports to the caller.
    #[instrument(skip(self, request), fields(
        correlation_id = %request.correlation_id,
        entry_point = %request.entry_point,
    ))]
    pub fn handle_call(&mut self, request: &CallRequestPayload) -> CallResponsePayload {
        match self.call(&request.entry_point, &request.args) {
            Ok(output) => {
                debug!(output_len = output.len(), "call committed");
                CallResponsePayload::committed(request.correlation_id, output)
            }
            Err(err) => {
                warn!(error = %err, "call aborted");
                CallResponsePayload::aborted(request.correlation_id, err.to_string())
            }
        }
    }

    /// Applies a successful call's effects: writes in deterministic key
    /// order, then buffered events.
    fn commit(&mut self, effects: CallEffects) -> Result<Vec<u8>, CallError> {
        for write in effects.writes {
            self.storage.set(write.key, write.value)?;
        }
        for event in effects.events {
            self.events.append(event);
            self.stats.events_emitted += 1;
        }
        Ok(effects.output)
    }
}

impl<S: ContractStorage, E: EventSink, D: DeploymentOracle> ContractApi
    for GreeterService<S, E, D>
{
    fn call(&mut self, entry_point: &str, args: &[u8]) -> Result<Vec<u8>, CallError> {
        self.stats.calls_handled += 1;

        let result = (|| {
            let entry = EntryPoint::from_name(entry_point).ok_or_else(|| {
                CallError::UnknownEntryPoint {
                    name: entry_point.to_string(),
                }
            })?;

            let is_deploying = self.oracle.is_deploying();
            let semantics = self.config.counter_semantics;

            let effects = {
                let mut frame = CallFrame::new(&self.storage);
                let output = match entry {
                    EntryPoint::Constructor => {
                        operations::constructor(&mut frame, args, is_deploying)
                    }
                    EntryPoint::Greet => operations::greet(&frame),
                    EntryPoint::SetGreeting => operations::set_greeting(&mut frame, args),
                    EntryPoint::GetValue => operations::get_value(&frame),
                    EntryPoint::SetValue => operations::set_value(&mut frame, args),
                    EntryPoint::GetCounter => operations::get_counter(&frame),
                    EntryPoint::Increment => operations::increment(&mut frame, semantics),
                    EntryPoint::Decrement => operations::decrement(&mut frame, semantics),
                }?;
                frame.into_effects(output)
            };

            self.commit(effects)
        })();

        match &result {
            Ok(_) => self.stats.committed_calls += 1,
            Err(_) => self.stats.aborted_calls += 1,
        }
        result
    }
}

/// Service over in-memory adapters, starting inside the deployment window.
#[must_use]
pub fn create_test_service(
    config: ServiceConfig,
) -> GreeterService<InMemoryStorage, InMemoryEventLog, FixedDeploymentOracle> {
    GreeterService::new(
        InMemoryStorage::new(),
        InMemoryEventLog::new(),
        FixedDeploymentOracle::new(true),
        config,
    )
}

// =============================================================================
// TESTS
// =============================================================================
