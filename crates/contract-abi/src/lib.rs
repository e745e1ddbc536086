//! # Contract ABI - Positional Argument Codec
//!
//! Encodes and decodes the single byte buffer that carries a contract call's
//! positional arguments. Every exported contract operation receives one such
//! buffer and may return one.
//!
//! ## Wire Format
//!
//! | Type     | Encoding                                     |
//! |----------|----------------------------------------------|
//! | `bool`   | 1 byte, `0x00` = false, `0x01` = true        |
//! | `u8`     | 1 byte                                       |
//! | `u32`    | 4 bytes, little-endian                       |
//! | `i32`    | 4 bytes, little-endian (two's complement)    |
//! | `u64`    | 8 bytes, little-endian                       |
//! | `string` | u32 little-endian byte length, then UTF-8    |
//!
//! Decoding is strictly sequential and order-dependent. There is no random
//! access and no named-field lookup: callers must decode fields in the exact
//! order they were encoded.
//!
//! ## Components
//!
//! | Component    | Location     | Purpose                                  |
//! |--------------|--------------|------------------------------------------|
//! | `ArgsReader` | `reader.rs`  | Cursor-based sequential decoder          |
//! | `ArgsWriter` | `writer.rs`  | Builder-style encoder                    |
//! | Value codecs | `values.rs`  | Bare single-value encodings (no prefix)  |
//! | `ArgsError`  | `errors.rs`  | Decode failure taxonomy                  |

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod errors;
pub mod reader;
pub mod values;
pub mod writer;

pub use errors::ArgsError;
pub use reader::ArgsReader;
pub use writer::ArgsWriter;
