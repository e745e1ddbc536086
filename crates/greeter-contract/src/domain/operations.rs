//! # State-Machine Operations
//!
//! The contract's entry-point bodies. Each operation decodes its declared
//! arguments in order, reads and stages writes through the call frame, and
//! buffers its events. The dispatcher owns the commit; an error return here
//! means nothing becomes visible.
//!
//! | Operation     | Arguments                  | Writes        | Event |
//! |---------------|----------------------------|---------------|-------|
//! | `constructor` | `string`, `u32`, `i32`     | all three     | yes   |
//! | `greet`       | none                       | none          | no    |
//! | `setGreeting` | `string`                   | greeting      | yes   |
//! | `getValue`    | none                       | none          | no    |
//! | `setValue`    | `u32`                      | value         | yes   |
//! | `getCounter`  | none                       | none          | no    |
//! | `increment`   | none                       | counter       | yes   |
//! | `decrement`   | none                       | counter       | yes   |

use contract_abi::{values, ArgsReader};

use crate::domain::entities::CounterSemantics;
use crate::domain::frame::CallFrame;
use crate::errors::{CallError, StorageError};
use crate::ports::outbound::ContractStorage;

/// Fixed storage keys. These are the on-disk schema and must stay stable
/// across contract upgrades.
pub mod keys {
    /// Greeting field: raw UTF-8 bytes.
    pub const GREETING: &str = "greeting_key";
    /// Value field: ASCII decimal u32.
    pub const VALUE: &str = "value_key";
    /// Counter field: ASCII decimal i32.
    pub const COUNTER: &str = "counter_key";
    /// Every key the constructor writes.
    pub const ALL: [&str; 3] = [GREETING, VALUE, COUNTER];
}

/// Returns true once any constructor-written key is visible to this call.
///
/// # Errors
///
/// Propagates storage backend failures.
pub fn is_initialized<S: ContractStorage>(frame: &CallFrame<'_, S>) -> Result<bool, StorageError> {
    for key in keys::ALL {
        if frame.has(key)? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn parse_stored_u32(bytes: &[u8]) -> Result<u32, StorageError> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|text| text.parse::<u32>().ok())
        .ok_or(StorageError::Corrupted {
            key: keys::VALUE,
            expected: "u32",
        })
}

pub(crate) fn parse_stored_i32(bytes: &[u8]) -> Result<i32, StorageError> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|text| text.parse::<i32>().ok())
        .ok_or(StorageError::Corrupted {
            key: keys::COUNTER,
            expected: "i32",
        })
}

// =============================================================================
// CONSTRUCTOR
// =============================================================================

/// Initializes all three fields from `(greeting: string, value: u32,
/// counter: i32)`.
///
/// Runs only in a deployment context and only once per storage; both checks
/// happen before any argument is decoded and any write is staged.
///
/// # Errors
///
/// `PreconditionViolation` outside deployment or on a second run; codec
/// errors for a short or undecodable buffer. No storage mutation survives
/// any failure.
pub fn constructor<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    args: &[u8],
    is_deploying: bool,
) -> Result<Vec<u8>, CallError> {
    if !is_deploying {
        return Err(CallError::PreconditionViolation {
            reason: "constructor may only run in a deployment context".to_string(),
        });
    }
    if is_initialized(frame)? {
        return Err(CallError::PreconditionViolation {
            reason: "constructor already ran against this storage".to_string(),
        });
    }

    let mut reader = ArgsReader::new(args);
    let greeting = reader.next_string()?;
    let value = reader.next_u32()?;
    let counter = reader.next_i32()?;

    frame.put(keys::GREETING, values::string_to_bytes(&greeting));
    frame.put(keys::VALUE, value.to_string().into_bytes());
    frame.put(keys::COUNTER, counter.to_string().into_bytes());
    frame.emit("Greeting, Value, and Counter initialized".to_string());

    Ok(Vec::new())
}

// =============================================================================
// GREETING
// =============================================================================

/// Returns the raw stored greeting bytes.
///
/// # Errors
///
/// `MissingKey` before the constructor has run; `Corrupted` if the stored
/// bytes are not UTF-8.
pub fn greet<S: ContractStorage>(frame: &CallFrame<'_, S>) -> Result<Vec<u8>, CallError> {
    let bytes = frame.read(keys::GREETING)?;
    if values::bytes_to_string(&bytes).is_err() {
        return Err(StorageError::Corrupted {
            key: keys::GREETING,
            expected: "string",
        }
        .into());
    }
    Ok(bytes)
}

/// Overwrites the greeting from `(new_greeting: string)`.
///
/// # Errors
///
/// Codec errors for a short or undecodable buffer; nothing is written on
/// failure.
pub fn set_greeting<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    args: &[u8],
) -> Result<Vec<u8>, CallError> {
    let new_greeting = ArgsReader::new(args).next_string()?;
    frame.put(keys::GREETING, values::string_to_bytes(&new_greeting));
    frame.emit(format!("Greeting updated to: {new_greeting}"));
    Ok(Vec::new())
}

// =============================================================================
// VALUE
// =============================================================================

/// Returns the raw stored value bytes (ASCII decimal u32).
///
/// # Errors
///
/// `MissingKey` before the constructor has run; `Corrupted` if the stored
/// bytes do not parse as a u32.
pub fn get_value<S: ContractStorage>(frame: &CallFrame<'_, S>) -> Result<Vec<u8>, CallError> {
    let bytes = frame.read(keys::VALUE)?;
    parse_stored_u32(&bytes)?;
    Ok(bytes)
}

/// Overwrites the value from `(new_value: u32)`.
///
/// # Errors
///
/// Codec errors for a short buffer; nothing is written on failure.
pub fn set_value<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    args: &[u8],
) -> Result<Vec<u8>, CallError> {
    let new_value = ArgsReader::new(args).next_u32()?;
    frame.put(keys::VALUE, new_value.to_string().into_bytes());
    frame.emit(format!("Value updated to: {new_value}"));
    Ok(Vec::new())
}

// =============================================================================
// COUNTER
// =============================================================================

/// Returns the raw stored counter bytes (ASCII decimal i32).
///
/// # Errors
///
/// `MissingKey` before the constructor has run; `Corrupted` if the stored
/// bytes do not parse as an i32.
pub fn get_counter<S: ContractStorage>(frame: &CallFrame<'_, S>) -> Result<Vec<u8>, CallError> {
    let bytes = frame.read(keys::COUNTER)?;
    parse_stored_i32(&bytes)?;
    Ok(bytes)
}

/// Steps the counter up by one under the configured semantics.
///
/// # Errors
///
/// `MissingKey` before the constructor has run; `Corrupted` for an
/// unparseable stored counter.
pub fn increment<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    semantics: CounterSemantics,
) -> Result<Vec<u8>, CallError> {
    let current = parse_stored_i32(&frame.read(keys::COUNTER)?)?;
    let next = semantics.step_up(current);
    frame.put(keys::COUNTER, next.to_string().into_bytes());
    frame.emit(format!("Counter incremented to: {next}"));
    Ok(Vec::new())
}

/// Steps the counter down by one under the configured semantics.
///
/// # Errors
///
/// `MissingKey` before the constructor has run; `Corrupted` for an
/// unparseable stored counter.
pub fn decrement<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    semantics: CounterSemantics,
) -> Result<Vec<u8>, CallError> {
    let current = parse_stored_i32(&frame.read(keys::COUNTER)?)?;
    let next = semantics.step_down(current);
    frame.put(keys::COUNTER, next.to_string().into_bytes());
    frame.emit(format!("Counter decremented to: {next}"));
    Ok(Vec::new())
}

// =============================================================================
// TESTS
// =============================================================================
