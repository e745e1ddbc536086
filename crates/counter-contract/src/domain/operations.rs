//! # State-Machine Operations
//!
//! Entry-point bodies for the unsigned counter. The counter is stored as 4
//! little-endian bytes and never goes negative: decrement clamps at zero,
//! increment and the arithmetic helpers wrap at the u32 boundary.
//!
//! | Operation             | Arguments                          | Writes  | Returns            |
//! |-----------------------|------------------------------------|---------|--------------------|
//! | `init`                | none                               | counter | empty              |
//! | `increment`           | `u32`                              | counter | new value          |
//! | `decrement`           | `u32`                              | counter | new value          |
//! | `getValue`            | none                               | none    | stored value       |
//! | `reset`               | `u32`                              | counter | new value          |
//! | `getValueWithMessage` | `string`                           | none    | formatted string   |
//! | `complexOperation`    | `string`, `u32`, `u32`, `bool`     | none    | `(u32, string)`    |

use contract_abi::{values, ArgsReader, ArgsWriter};

use crate::domain::frame::CallFrame;
use crate::errors::{CallError, StorageError};
use crate::ports::outbound::ContractStorage;

/// Fixed storage keys (the on-disk schema).
pub mod keys {
    /// Counter field: 4 little-endian bytes.
    pub const COUNTER: &str = "counter";
}

fn read_counter<S: ContractStorage>(frame: &CallFrame<'_, S>) -> Result<u32, CallError> {
    let bytes = frame.read(keys::COUNTER)?;
    values::bytes_to_u32(&bytes).map_err(|_| {
        StorageError::Corrupted {
            key: keys::COUNTER,
        }
        .into()
    })
}

fn store_counter<S: ContractStorage>(frame: &mut CallFrame<'_, S>, value: u32) -> Vec<u8> {
    let bytes = values::u32_to_bytes(value);
    frame.put(keys::COUNTER, bytes.clone());
    bytes
}

// =============================================================================
// DEPLOYMENT
// =============================================================================

/// Initializes the counter to zero. Deployment context only, once per
/// storage.
///
/// # Errors
///
/// `PreconditionViolation` outside deployment or on a second run.
pub fn init<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    is_deploying: bool,
) -> Result<Vec<u8>, CallError> {
    if !is_deploying {
        return Err(CallError::PreconditionViolation {
            reason: "init may only run in a deployment context".to_string(),
        });
    }
    if frame.has(keys::COUNTER)? {
        return Err(CallError::PreconditionViolation {
            reason: "init already ran against this storage".to_string(),
        });
    }

    store_counter(frame, 0);
    frame.emit("Counter initialized to: 0".to_string());
    Ok(Vec::new())
}

// =============================================================================
// COUNTER STEPS
// =============================================================================

/// Adds `(amount: u32)` to the counter, wrapping at the u32 boundary, and
/// returns the new value.
///
/// # Errors
///
/// Codec errors for a bad buffer; `MissingKey`/`Corrupted` for absent or
/// undecodable stored state.
pub fn increment<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    args: &[u8],
) -> Result<Vec<u8>, CallError> {
    let amount = ArgsReader::new(args).next_u32()?;
    let current = read_counter(frame)?;
    let next = current.wrapping_add(amount);
    let bytes = store_counter(frame, next);
    frame.emit(format!("Counter incremented to: {next}"));
    Ok(bytes)
}

/// Subtracts `(amount: u32)` from the counter, clamping at zero, and
/// returns the new value.
///
/// # Errors
///
/// Codec errors for a bad buffer; `MissingKey`/`Corrupted` for absent or
/// undecodable stored state.
pub fn decrement<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    args: &[u8],
) -> Result<Vec<u8>, CallError> {
    let amount = ArgsReader::new(args).next_u32()?;
    let current = read_counter(frame)?;
    let next = if current > amount { current - amount } else { 0 };
    let bytes = store_counter(frame, next);
    frame.emit(format!("Counter decremented to: {next}"));
    Ok(bytes)
}

/// Returns the stored counter bytes.
///
/// # Errors
///
/// `MissingKey` before `init`; `Corrupted` for undecodable stored state.
pub fn get_value<S: ContractStorage>(frame: &CallFrame<'_, S>) -> Result<Vec<u8>, CallError> {
    let current = read_counter(frame)?;
    Ok(values::u32_to_bytes(current))
}

/// Overwrites the counter from `(new_value: u32)` and returns it.
///
/// # Errors
///
/// Codec errors for a bad buffer.
pub fn reset<S: ContractStorage>(
    frame: &mut CallFrame<'_, S>,
    args: &[u8],
) -> Result<Vec<u8>, CallError> {
    let new_value = ArgsReader::new(args).next_u32()?;
    let bytes = store_counter(frame, new_value);
    frame.emit(format!("Counter reset to: {new_value}"));
    Ok(bytes)
}

// =============================================================================
// FORMATTED READS
// =============================================================================

/// Returns `"{message}: {counter}"` for `(message: string)` as raw UTF-8.
///
/// # Errors
///
/// Codec errors for a bad buffer; `MissingKey`/`Corrupted` for absent or
/// undecodable stored state.
pub fn get_value_with_message<S: ContractStorage>(
    frame: &CallFrame<'_, S>,
    args: &[u8],
) -> Result<Vec<u8>, CallError> {
    let message = ArgsReader::new(args).next_string()?;
    let current = read_counter(frame)?;
    Ok(values::string_to_bytes(&format!("{message}: {current}")))
}

/// Pure arithmetic over `(operation: string, value1: u32, value2: u32,
/// shouldMultiply: bool)`; touches no storage.
///
/// Returns a positional buffer of `(result: u32, confirmation: string)`.
///
/// # Errors
///
/// Codec errors for a bad buffer.
pub fn complex_operation(args: &[u8]) -> Result<Vec<u8>, CallError> {
    let mut reader = ArgsReader::new(args);
    let operation = reader.next_string()?;
    let value1 = reader.next_u32()?;
    let value2 = reader.next_u32()?;
    let should_multiply = reader.next_bool()?;

    let result = match operation.as_str() {
        "add" => value1.wrapping_add(value2),
        "subtract" => {
            if value1 > value2 {
                value1 - value2
            } else {
                0
            }
        }
        "multiply" if should_multiply => value1.wrapping_mul(value2),
        _ => value1,
    };

    Ok(ArgsWriter::new()
        .add_u32(result)
        .add_string(&format!("Operation {operation} completed"))
        .into_bytes())
}

// =============================================================================
// TESTS
// =============================================================================
