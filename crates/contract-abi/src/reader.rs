//! # Argument Reader
//!
//! Sequential decoder over a borrowed argument buffer. The cursor is an
//! explicit value owned by the reader; each `next_*` call consumes exactly
//! one field and advances it, or fails without moving it. Decode order must
//! match encode order.

use crate::errors::ArgsError;

/// Cursor-based decoder for one positional argument buffer.
///
/// ```
/// use contract_abi::{ArgsReader, ArgsWriter};
///
/// let buf = ArgsWriter::new().add_string("hi").add_u32(7).into_bytes();
/// let mut reader = ArgsReader::new(&buf);
/// assert_eq!(reader.next_string().unwrap(), "hi");
/// assert_eq!(reader.next_u32().unwrap(), 7);
/// assert!(reader.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct ArgsReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ArgsReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current cursor offset in bytes.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left after the cursor.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Returns true once every byte has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.offset == self.data.len()
    }

    /// Consumes `needed` bytes for a field of type `expected`.
    fn take(&mut self, expected: &'static str, needed: usize) -> Result<&'a [u8], ArgsError> {
        let available = self.remaining();
        if available < needed {
            return Err(ArgsError::MissingArgument {
                expected,
                offset: self.offset,
                needed,
                available,
            });
        }
        let slice = &self.data[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(slice)
    }

    /// Decodes the next field as a boolean (1 byte, strictly 0 or 1).
    ///
    /// # Errors
    ///
    /// `MissingArgument` on a short buffer, `MalformedArgument` for any byte
    /// other than `0x00` or `0x01`.
    pub fn next_bool(&mut self) -> Result<bool, ArgsError> {
        let start = self.offset;
        let byte = self.take("bool", 1)?[0];
        match byte {
            0 => Ok(false),
            1 => Ok(true),
            other => {
                // Restore the cursor so the failure is observable in place.
                self.offset = start;
                Err(ArgsError::MalformedArgument {
                    expected: "bool",
                    offset: start,
                    reason: format!("byte 0x{other:02X} is neither 0 nor 1"),
                })
            }
        }
    }

    /// Decodes the next field as an unsigned 8-bit integer.
    ///
    /// # Errors
    ///
    /// `MissingArgument` on a short buffer.
    pub fn next_u8(&mut self) -> Result<u8, ArgsError> {
        Ok(self.take("u8", 1)?[0])
    }

    /// Decodes the next field as a little-endian unsigned 32-bit integer.
    ///
    /// # Errors
    ///
    /// `MissingArgument` on a short buffer.
    pub fn next_u32(&mut self) -> Result<u32, ArgsError> {
        let bytes = self.take("u32", 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Decodes the next field as a little-endian signed 32-bit integer.
    ///
    /// # Errors
    ///
    /// `MissingArgument` on a short buffer.
    pub fn next_i32(&mut self) -> Result<i32, ArgsError> {
        let bytes = self.take("i32", 4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Decodes the next field as a little-endian unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// `MissingArgument` on a short buffer.
    pub fn next_u64(&mut self) -> Result<u64, ArgsError> {
        let bytes = self.take("u64", 8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    /// Decodes the next field as a length-prefixed UTF-8 string.
    ///
    /// The prefix is a u32 little-endian byte length. A prefix that promises
    /// more bytes than the buffer holds is a short-buffer failure; a body
    /// that is not valid UTF-8 is a malformed one.
    ///
    /// # Errors
    ///
    /// `MissingArgument` when the prefix or body is truncated,
    /// `MalformedArgument` on invalid UTF-8.
    pub fn next_string(&mut self) -> Result<String, ArgsError> {
        let start = self.offset;
        let len_bytes = self.take("string", 4)?;
        let len =
            u32::from_le_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]) as usize;

        let body = match self.take("string", len) {
            Ok(body) => body,
            Err(err) => {
                self.offset = start;
                return Err(err);
            }
        };

        match std::str::from_utf8(body) {
            Ok(text) => Ok(text.to_string()),
            Err(utf8_err) => {
                self.offset = start;
                Err(ArgsError::MalformedArgument {
                    expected: "string",
                    offset: start,
                    reason: format!("invalid UTF-8: {utf8_err}"),
                })
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
