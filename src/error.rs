//! # Error Handling
//!
//! This module defines [`CascadeError`], the single error type returned by
//! every fallible operation in the crate: catalog lookup, CRC computation,
//! input normalization, cascade assignment, and table packing.

use thiserror::Error;

/// Represents the different error kinds that can occur while building a
/// cascade hash table. All are fatal to the current build; none are
/// recovered in-band.
#[derive(Debug, Error)]
pub enum CascadeError {
    /// The symbol input file is missing or unreadable.
    #[error("input file not found or unreadable: {0}")]
    InputNotFound(String),

    /// Non-ASCII input in ascii mode, or invalid hex in hex mode.
    #[error("input encoding error: {0}")]
    InputEncoding(String),

    /// A symbol exceeds the 32-byte per-entry width.
    #[error("symbol too long: {len} bytes (max 32)")]
    SymbolTooLong {
        /// The offending symbol's length in bytes.
        len: usize,
    },

    /// The input set exceeds `max_ids`.
    #[error("too many symbols: {count} exceeds max_ids {max_ids}")]
    TooManySymbols {
        /// Number of symbols in the input.
        count: usize,
        /// The configured ceiling.
        max_ids: u64,
    },

    /// The selected CRC width would exceed the largest catalogued width (30).
    #[error("max_ids {0} requires a CRC width greater than 30")]
    MaxIdsTooLarge(u64),

    /// An output path (packed table or readable mapping) could not be written.
    #[error("failed to write output file: {0}")]
    OutputWriteFailed(String),

    /// Lookup failure in the polynomial catalog; indicates an internal bug.
    #[error("unknown polynomial: {0}")]
    UnknownPolynomial(String),

    /// After every polynomial in the cascade was tried, symbols remained unassigned.
    #[error("unresolvable conflicts: {0} symbols could not be assigned")]
    UnresolvableConflicts(usize),
}
