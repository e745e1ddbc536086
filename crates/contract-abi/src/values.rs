//! # Bare Value Codecs
//!
//! Encodings for a single value standing alone, used for stored fields and
//! bare return buffers. Unlike positional arguments these carry no length
//! prefix: the buffer boundary is the value boundary.

use crate::errors::ArgsError;

/// Encodes a u32 as 4 little-endian bytes.
#[must_use]
pub fn u32_to_bytes(value: u32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Decodes a bare u32 from exactly 4 little-endian bytes.
///
/// # Errors
///
/// `MissingArgument` when fewer than 4 bytes are present,
/// `MalformedArgument` when trailing bytes follow the value.
pub fn bytes_to_u32(bytes: &[u8]) -> Result<u32, ArgsError> {
    if bytes.len() < 4 {
        return Err(ArgsError::MissingArgument {
            expected: "u32",
            offset: 0,
            needed: 4,
            available: bytes.len(),
        });
    }
    if bytes.len() > 4 {
        return Err(ArgsError::MalformedArgument {
            expected: "u32",
            offset: 0,
            reason: format!("expected exactly 4 bytes, got {}", bytes.len()),
        });
    }
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Encodes a string as its raw UTF-8 bytes.
#[must_use]
pub fn string_to_bytes(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decodes a bare UTF-8 string from the whole buffer.
///
/// # Errors
///
/// `MalformedArgument` on invalid UTF-8.
pub fn bytes_to_string(bytes: &[u8]) -> Result<String, ArgsError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|utf8_err| ArgsError::MalformedArgument {
            expected: "string",
            offset: 0,
            reason: format!("invalid UTF-8: {utf8_err}"),
        })
}

// =============================================================================
// TESTS
// =============================================================================
