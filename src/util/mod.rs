//! # Utility Modules
//!
//! Common helpers used by the CRC engine and the symbol-file readers: bit
//! reversal (for `reflect_in`/`reflect_out`) and hex encoding/decoding
//! (for `--format hex` and debug-level packed-table dumps).

pub mod bitrev;
pub mod hex;

pub use bitrev::rev8;
pub use hex::{decode_hex, encode_hex, pretty_hex};
