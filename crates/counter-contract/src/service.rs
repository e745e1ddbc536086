//! # Contract Service
//!
//! Entry-point dispatcher for the unsigned counter. One call maps to one
//! operation; its staged writes and buffered events commit together, or the
//! call aborts and nothing does.

use tracing::{debug, instrument, warn};

use crate::adapters::{FixedDeploymentOracle, InMemoryEventLog, InMemoryStorage};
use crate::domain::frame::{CallEffects, CallFrame};
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
    Init,
    /// Add an amount to the counter.
    Increment,
    /// Subtract an amount, clamped at zero.
    Decrement,
    /// Read the counter.
    GetValue,
    /// Overwrite the counter.
    Reset,
    /// Read the counter with a caller-supplied message.
    GetValueWithMessage,
    /// Stateless multi-argument arithmetic.
    ComplexOperation,
}

impl EntryPoint {
    /// Resolves an exported name, or None for anything not exported.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            entry_points::INIT => Some(Self::Init),
            entry_points::INCREMENT => Some(Self::Increment),
            entry_points::DECREMENT => Some(Self::Decrement),
            entry_points::GET_VALUE => Some(Self::GetValue),
            entry_points::RESET => Some(Self::Reset),
            entry_points::GET_VALUE_WITH_MESSAGE => Some(Self::GetValueWithMessage),
            entry_points::COMPLEX_OPERATION => Some(Self::ComplexOperation),
            _ => None,
        }
    }

    /// The exported name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => entry_points::INIT,
            Self::Increment => entry_points::INCREMENT,
            Self::Decrement => entry_points::DECREMENT,
            Self::GetValue => entry_points::GET_VALUE,
            Self::Reset => entry_points::RESET,
            Self::GetValueWithMessage => entry_points::GET_VALUE_WITH_MESSAGE,
            Self::ComplexOperation => entry_points::COMPLEX_OPERATION,
        }
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

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

/// The counter contract bound to its host collaborators.
pub struct CounterService<S: ContractStorage, E: EventSink, D: DeploymentOracle> {
    storage: S,
    events: E,
    oracle: D,
    stats: ServiceStats,
}

impl<S: ContractStorage, E: EventSink, D: DeploymentOracle> CounterService<S, E, D> {
    /// Binds a service to its collaborators.
    pub fn new(storage: S, events: E, oracle: D) -> Self {
        Self {
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

    /// Lifetime statistics.
    pub fn stats(&self) -> &ServiceStats {
        &self.stats
    }

    /// Handles one call envelope; aborts become unsuccessful responses.
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
    for CounterService<S, E, D>
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

            let effects = {
                let mut frame = CallFrame::new(&self.storage);
                let output = match entry {
                    EntryPoint::Init => operations::init(&mut frame, is_deploying),
                    EntryPoint::Increment => operations::increment(&mut frame, args),
                    EntryPoint::Decrement => operations::decrement(&mut frame, args),
                    EntryPoint::GetValue => operations::get_value(&frame),
                    EntryPoint::Reset => operations::reset(&mut frame, args),
                    EntryPoint::GetValueWithMessage => {
                        operations::get_value_with_message(&frame, args)
                    }
                    EntryPoint::ComplexOperation => operations::complex_operation(args),
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
pub fn create_test_service() -> CounterService<InMemoryStorage, InMemoryEventLog, FixedDeploymentOracle>
{
    CounterService::new(
        InMemoryStorage::new(),
        InMemoryEventLog::new(),
        FixedDeploymentOracle::new(true),
    )
}

// =============================================================================
// TESTS
// =============================================================================
