//! # Table Packer
//!
//! Lays out the packed binary lookup table a downstream engine addresses
//! directly: `(polynomial_index << crc_width) | crc_value` selects a slot,
//! whose little-endian 32-bit payload is `unique_id | (1 << crc_width)`
//! when occupied, or all-zero otherwise.

use crate::cascade::Assignment;
use crate::catalog::{self};
use crate::crc::crc;
use crate::symbol::Symbol;

/// Bytes per packed-table entry.
pub const ENTRY_BYTES: usize = 4;
/// Polynomials per width, and thus blocks per packed table.
pub const BLOCKS: usize = catalog::POLYNOMIALS_PER_WIDTH;

/// The packed binary table plus the human-readable `symbol -> id` mapping,
/// both derived from one set of cascade [`Assignment`]s.
#[derive(Debug, Clone)]
pub struct PackedTable {
    pub crc_width: u32,
    pub id_mask: u64,
    pub bytes: Vec<u8>,
}

impl PackedTable {
    /// `8 * 2^crc_width * 4` bytes, zero-initialized, then one entry written
    /// per assigned symbol.
    pub fn build(symbols: &[Symbol], assignments: &[Assignment], crc_width: u32, id_mask: u64) -> Self {
        let slots_per_block = 1usize << crc_width;
        let mut bytes = vec![0u8; BLOCKS * slots_per_block * ENTRY_BYTES];
        let validity_bit = 1u32 << crc_width;

        for (symbol, assignment) in symbols.iter().zip(assignments) {
            let poly_idx = catalog::index_of(crc_width, assignment.polynomial.name)
                .expect("assignment references a catalogued polynomial");
            let hash_val = (crc(assignment.polynomial, symbol.as_bytes()) & id_mask) as u32;
            let addr = (poly_idx << crc_width) | hash_val as usize;
            let payload = assignment.unique_id as u32 | validity_bit;
            let offset = addr * ENTRY_BYTES;
            bytes[offset..offset + ENTRY_BYTES].copy_from_slice(&payload.to_le_bytes());
        }

        PackedTable {
            crc_width,
            id_mask,
            bytes,
        }
    }

    /// Reads the 32-bit little-endian payload at `(poly_idx << crc_width) | hash`.
    /// `0` means the slot is empty; otherwise bit `crc_width` is set and the
    /// low bits are the unique ID.
    pub fn read_slot(&self, poly_idx: usize, hash: u64) -> u32 {
        let addr = (poly_idx << self.crc_width) | hash as usize;
        let offset = addr * ENTRY_BYTES;
        u32::from_le_bytes(self.bytes[offset..offset + ENTRY_BYTES].try_into().unwrap())
    }
}

/// Renders the readable `<symbol> -> <unique_id>` mapping, one line per
/// input symbol, in original input order. `symbol` is rendered as UTF-8
/// lossy text (matches the ASCII symbol-file convention); callers with
/// hex-mode input may prefer [`crate::util::hex::encode_hex`] per symbol
/// instead.
pub fn readable_table(raw_symbols: &[String], assignments: &[Assignment]) -> String {
    let mut out = String::new();
    for (raw, assignment) in raw_symbols.iter().zip(assignments) {
        out.push_str(raw);
        out.push_str(" -> ");
        out.push_str(&assignment.unique_id.to_string());
        out.push('\n');
    }
    out
}
