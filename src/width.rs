//! # CRC-Width Selection
//!
//! Derives the CRC width and ID mask from a requested `max_ids` capacity.
//! Shared by the cascade assigner (needs `id_mask`) and the table packer
//! (needs both `crc_width` and `id_mask`).

use crate::catalog::{MAX_WIDTH, MIN_WIDTH};
use crate::error::CascadeError;
use crate::logging::log_warn;

/// The derived parameters for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthSelection {
    pub crc_width: u32,
    pub id_mask: u64,
}

fn floor_log2(n: u64) -> u32 {
    if n == 0 {
        0
    } else {
        63 - n.leading_zeros()
    }
}

/// Selects `crc_width` and `id_mask` for `max_ids`.
///
/// `required_bits = floor(log2(max_ids))` determines `id_mask`; `crc_width`
/// is `required_bits` rounded up to the nearest even number and clamped to
/// the catalog's minimum width. When `max_ids` is not a power of two,
/// `id_mask` can be narrower than the full `rounded` capacity — this mirrors
/// the upstream reference implementation and is preserved deliberately (see
/// the design notes on this open question).
pub fn select_width(max_ids: u64) -> Result<WidthSelection, CascadeError> {
    let required_bits = floor_log2(max_ids);
    let rounded_width = if required_bits.is_multiple_of(2) {
        required_bits
    } else {
        required_bits + 1
    };
    let crc_width = rounded_width.max(MIN_WIDTH);

    if rounded_width < MIN_WIDTH {
        log_warn(&format!(
            "max_ids {max_ids} rounds to a CRC width of {rounded_width}, below the catalog minimum; falling back to width {MIN_WIDTH}"
        ));
    }

    if crc_width > MAX_WIDTH {
        return Err(CascadeError::MaxIdsTooLarge(max_ids));
    }

    let id_mask = if required_bits >= 64 {
        u64::MAX
    } else {
        (1u64 << required_bits) - 1
    };

    Ok(WidthSelection { crc_width, id_mask })
}
