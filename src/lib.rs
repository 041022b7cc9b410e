//! # crc-cascade - Static Perfect Hashing via a CRC Polynomial Cascade
//!
//! `crc-cascade` builds a static, read-only perfect-hash lookup table for a
//! fixed set of symbols (ticker symbols, enum names, interned strings): one
//! table build, many lookups, no rehashing. Instead of a single hash
//! function with open addressing, it tries an ordered cascade of eight CRC
//! polynomials per width; each polynomial absorbs whichever symbols do not
//! collide with another not-yet-assigned symbol, and later polynomials
//! clean up whatever the earlier ones left behind.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! crc-cascade = "0.1.0"
//! ```
//!
//! ```rust
//! use crc_cascade::{CascadeHasher, symbol_file::RawSymbol};
//!
//! let hasher = CascadeHasher::new(32).unwrap();
//! let input = vec![
//!     RawSymbol { text: "AAPL".into(), bytes: b"AAPL".to_vec() },
//!     RawSymbol { text: "MSFT".into(), bytes: b"MSFT".to_vec() },
//! ];
//! let result = hasher.build(&input).unwrap();
//! assert_eq!(result.assignments.len(), 2);
//! ```

pub mod cascade;
pub mod catalog;
pub mod crc;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod symbol;
pub mod symbol_file;
pub mod table;
pub mod util;
pub mod width;

pub use crate::error::CascadeError;
pub use crate::hasher::{BuildResult, CascadeHasher};
pub use crate::logging::{init_logger, log_info};
