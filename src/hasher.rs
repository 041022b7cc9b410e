//! # Cascade Hasher
//!
//! Ties the component modules together into the lifecycle described in the
//! data model: construct with `max_ids` (binding the CRC width and
//! polynomial catalog once), then call [`CascadeHasher::build`] exactly
//! once. The hasher is immutable afterward; the packed and readable tables
//! it returns may be serialized any number of times.

use crate::cascade::{self, Assignment};
use crate::error::CascadeError;
use crate::logging::log_info;
use crate::symbol::{self, Symbol};
use crate::symbol_file::RawSymbol;
use crate::table::{self, PackedTable};
use crate::width::{self, WidthSelection};

/// Constructed once per build; owns the derived CRC width and ID mask.
pub struct CascadeHasher {
    max_ids: u64,
    width: WidthSelection,
}

/// Everything produced by one successful build.
#[derive(Debug)]
pub struct BuildResult {
    pub symbols: Vec<Symbol>,
    pub assignments: Vec<Assignment>,
    pub packed: PackedTable,
    pub readable: String,
}

impl CascadeHasher {
    /// Selects the CRC width and ID mask for `max_ids`. Fails with
    /// [`CascadeError::MaxIdsTooLarge`] if no catalogued width fits.
    pub fn new(max_ids: u64) -> Result<Self, CascadeError> {
        let width = width::select_width(max_ids)?;
        Ok(CascadeHasher { max_ids, width })
    }

    pub fn crc_width(&self) -> u32 {
        self.width.crc_width
    }

    pub fn max_ids(&self) -> u64 {
        self.max_ids
    }

    /// Normalizes `raw_symbols`, runs the cascade assigner, and packs the
    /// resulting table. Consumes no hasher state beyond `self`; may be
    /// called only once per [`CascadeHasher`] per the documented lifecycle.
    pub fn build(&self, raw_symbols: &[RawSymbol]) -> Result<BuildResult, CascadeError> {
        let raw_bytes: Vec<Vec<u8>> = raw_symbols.iter().map(|s| s.bytes.clone()).collect();
        let symbols = symbol::normalize(&raw_bytes, self.max_ids)?;

        log_info(&format!(
            "building cascade for {} symbols at CRC width {}",
            symbols.len(),
            self.width.crc_width
        ));

        let assignments = cascade::assign(&symbols, self.width.crc_width, self.width.id_mask)?;

        let packed = PackedTable::build(&symbols, &assignments, self.width.crc_width, self.width.id_mask);
        let texts: Vec<String> = raw_symbols.iter().map(|s| s.text.clone()).collect();
        let readable = table::readable_table(&texts, &assignments);

        log_info(&format!(
            "build complete: {} symbols assigned across {} polynomials",
            assignments.len(),
            crate::catalog::POLYNOMIALS_PER_WIDTH
        ));

        Ok(BuildResult {
            symbols,
            assignments,
            packed,
            readable,
        })
    }
}
