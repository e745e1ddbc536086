//! # Argument Writer
//!
//! Builder-style encoder producing a call's positional argument buffer.
//! Fields are appended in declaration order; the reader must consume them in
//! the same order.

/// Builder for one positional argument buffer.
#[derive(Debug, Default, Clone)]
pub struct ArgsWriter {
    buf: Vec<u8>,
}

impl ArgsWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a boolean as a single `0x00`/`0x01` byte.
    #[must_use]
    pub fn add_bool(mut self, value: bool) -> Self {
        self.buf.push(u8::from(value));
        self
    }

    /// Appends an unsigned 8-bit integer.
    #[must_use]
    pub fn add_u8(mut self, value: u8) -> Self {
        self.buf.push(value);
        self
    }

    /// Appends an unsigned 32-bit integer, little-endian.
    #[must_use]
    pub fn add_u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends a signed 32-bit integer, little-endian.
    #[must_use]
    pub fn add_i32(mut self, value: i32) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends an unsigned 64-bit integer, little-endian.
    #[must_use]
    pub fn add_u64(mut self, value: u64) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends a string as a u32 little-endian byte-length prefix followed
    /// by its UTF-8 bytes.
    ///
    /// # Panics
    ///
    /// Panics if the string is longer than `u32::MAX` bytes, which exceeds
    /// any buffer the call ABI can carry.
    #[must_use]
    pub fn add_string(mut self, value: &str) -> Self {
        let len = u32::try_from(value.len()).expect("string exceeds ABI length limit");
        self.buf.extend_from_slice(&len.to_le_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    /// Number of encoded bytes so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been encoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finishes encoding and yields the argument buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

// =============================================================================
// TESTS
// =============================================================================
