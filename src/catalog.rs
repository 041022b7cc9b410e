//! # Polynomial Catalog
//!
//! A static, process-wide database of CRC parameter sets drawn from Philip
//! Koopman's published CRC polynomial database
//! (<https://users.ece.cmu.edu/~koopman/crc/>). Each catalogued width offers
//! exactly eight polynomials in a fixed priority order; the
//! [`crate::cascade`] assigner tries them in that order and must never
//! reorder them.

use crate::error::CascadeError;

/// An immutable CRC parameter set.
///
/// `poly` carries the generator polynomial with its implicit leading one
/// still set (as published); only the low `width` bits participate in the
/// register XOR — see [`Self::poly_masked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialParams {
    pub width: u32,
    pub poly: u64,
    pub reflect_in: bool,
    pub xor_in: u64,
    pub reflect_out: bool,
    pub xor_out: u64,
    pub name: &'static str,
}

impl PolynomialParams {
    const fn new(width: u32, poly: u64, name: &'static str) -> Self {
        PolynomialParams {
            width,
            poly,
            reflect_in: false,
            xor_in: 0,
            reflect_out: false,
            xor_out: 0,
            name,
        }
    }

    /// `poly` masked to the low `width` bits, with the implicit leading one removed.
    pub fn poly_masked(&self) -> u64 {
        self.poly & ((1u64 << self.width) - 1)
    }
}

macro_rules! width_block {
    ($width:expr, [$(($name:expr, $poly:expr)),+ $(,)?]) => {
        &[$(PolynomialParams::new($width, $poly, $name)),+]
    };
}

static WIDTH_8: &[PolynomialParams] = width_block!(8, [
    ("CRC-8F-3", 0x1cf),
    ("CRC-8K-3", 0x14d),
    ("SAE-J1850", 0x11d),
    ("CCITT-8", 0x163),
    ("CRC-8F-8", 0x17f),
    ("CRC-8-AUTOSAR", 0x12f),
    ("CRC-8-Bluetooth", 0x1a7),
    ("WCDMA-8", 0x19b),
]);

static WIDTH_10: &[PolynomialParams] = width_block!(10, [
    ("CRC-10F-3", 0x64f),
    ("CRC-10F-8.1", 0x5fb),
    ("CRC-10F-6.1", 0x58f),
    ("FP-10", 0x409),
    ("CRC-10F-4.2", 0x48f),
    ("CRC-10F-8.2", 0x5bd),
    ("CRC-10-CDMA2000", 0x7d9),
    ("FOP-11", 0x40d),
]);

static WIDTH_12: &[PolynomialParams] = width_block!(12, [
    ("CRC-12F-3", 0x130f),
    ("CRC-12K-7", 0x1467),
    ("FP-12", 0x1053),
    ("CRC-12F-9", 0x1bbf),
    ("CRC-12K-5.2", 0x17bf),
    ("CRC-12F-6.1", 0x107d),
    ("CRC-12F-4.2", 0x11e7),
    ("CRC-12-CDMA2000", 0x1f13),
]);

static WIDTH_14: &[PolynomialParams] = width_block!(14, [
    ("CRC-14F-3", 0x4f9f),
    ("CRC-14F-7", 0x5153),
    ("CRC-14F-11", 0x6fdf),
    ("FP-14", 0x402b),
    ("CRC-14F-10.1", 0x7577),
    ("CRC-14F-9", 0x692f),
    ("CRC-14K-3", 0x4ed3),
    ("CRC-14K-8", 0x549f),
]);

static WIDTH_16: &[PolynomialParams] = width_block!(16, [
    ("CRC-16F-3", 0x11b2b),
    ("CRC-16F-11", 0x1fb7f),
    ("FP-16", 0x1002d),
    ("CRC-16K-3", 0x18f57),
    ("CRC-16F-10.1", 0x12f3d),
    ("CRC-16K-5", 0x12c4f),
    ("CRC-16-CDMA2000", 0x1c867),
    ("CRC-16-T10-DIF", 0x18bb7),
]);

static WIDTH_18: &[PolynomialParams] = width_block!(18, [
    ("CRC-18K-3.1", 0x472f3),
    ("FP-18", 0x40027),
    ("CRC-18K-3.5", 0x4717d),
    ("CRC-18K-3.6", 0x5a13f),
    ("CRC-18K-3.4", 0x43757),
    ("CRC-18K-3.2", 0x57dad),
    ("CRC-18K-3.3", 0x5dc93),
    ("CRC-18K-11", 0x4d47b),
]);

static WIDTH_20: &[PolynomialParams] = width_block!(20, [
    ("CRC-20K-3.1", 0x16b04f),
    ("CRC-20K-3.5", 0x168d6f),
    ("CRC-20K-3.7", 0x189b0f),
    ("CRC-20K-3.2", 0x15eadf),
    ("CRC-20K-3.3", 0x19bdf3),
    ("CRC-20K-3.6", 0x174497),
    ("CRC-20K-3.8", 0x15f9b7),
    ("CRC-20K-3.4", 0x151193),
]);

static WIDTH_22: &[PolynomialParams] = width_block!(22, [
    ("CRC-22K-3.1", 0x611fa7),
    ("CRC-22K-3.5", 0x6dc801),
    ("CRC-22K-3.7", 0x529aa9),
    ("CRC-22K-3.10", 0x722bd3),
    ("CRC-22K-3.9", 0x4e536b),
    ("CRC-22K-3.2", 0x77862d),
    ("CRC-22K-3.4", 0x7df163),
    ("CRC-22K-3.3", 0x4bdefb),
]);

static WIDTH_24: &[PolynomialParams] = width_block!(24, [
    ("CRC-24K-3.1", 0x100001b),
    ("CRC-24K-3.2", 0x11f21c7),
    ("CRC-24K-3.8", 0x17b49ab),
    ("CRC-24K-3.3", 0x127969f),
    ("CRC-24K-3.7", 0x16ebd57),
    ("CRC-24K-3.6", 0x12826ad),
    ("CRC-24K-3.9", 0x14e6b4f),
    ("CRC-24K-3.10", 0x170ea2b),
]);

static WIDTH_26: &[PolynomialParams] = width_block!(26, [
    ("CRC-26K-3.1", 0x67833df),
    ("CRC-26K-3.6", 0x74cdc9f),
    ("CRC-26K-3.11", 0x4fd6f67),
    ("CRC-26K-3.7", 0x52145f5),
    ("CRC-26K-3.2", 0x6c95597),
    ("CRC-26K-3.5", 0x76c28cf),
    ("CRC-26K-3.12", 0x7d32257),
    ("CRC-26K-3.4", 0x529ef3d),
]);

static WIDTH_28: &[PolynomialParams] = width_block!(28, [
    ("CRC-28K-3.1", 0x123b83c7),
    ("CRC-28K-3.5", 0x102c41cb),
    ("CRC-28K-3.4", 0x17a0e8a7),
    ("CRC-28K-3.9", 0x19ed232f),
    ("CRC-28K-3.2", 0x11747ad7),
    ("CRC-28K-3.8", 0x112a0cbd),
    ("CRC-28K-3.11", 0x10d6cab9),
    ("CRC-28K-3.10", 0x169d901f),
]);

static WIDTH_30: &[PolynomialParams] = width_block!(30, [
    ("CRC-30K-3.1", 0x6268545f),
    ("CRC-30K-3.3", 0x54b7233b),
    ("CRC-30K-3.11", 0x68a55347),
    ("CRC-30K-3.8", 0x41667891),
    ("CRC-30K-3.9", 0x4922d0ab),
    ("CRC-30K-3.2", 0x6220e663),
    ("CRC-30K-3.13", 0x512ff0cb),
    ("CRC-30K-3.12", 0x46d305c7),
]);

/// The minimum catalogued CRC width.
pub const MIN_WIDTH: u32 = 8;
/// The maximum catalogued CRC width.
pub const MAX_WIDTH: u32 = 30;
/// Every catalogued width offers exactly this many polynomials.
pub const POLYNOMIALS_PER_WIDTH: usize = 8;

/// Returns the ordered list of polynomials catalogued for `width`, or `None`
/// if `width` is not one of the twelve catalogued widths.
pub fn polynomials_for(width: u32) -> Option<&'static [PolynomialParams]> {
    match width {
        8 => Some(WIDTH_8),
        10 => Some(WIDTH_10),
        12 => Some(WIDTH_12),
        14 => Some(WIDTH_14),
        16 => Some(WIDTH_16),
        18 => Some(WIDTH_18),
        20 => Some(WIDTH_20),
        22 => Some(WIDTH_22),
        24 => Some(WIDTH_24),
        26 => Some(WIDTH_26),
        28 => Some(WIDTH_28),
        30 => Some(WIDTH_30),
        _ => None,
    }
}

/// Returns the position of `name` within its width's ordered list.
pub fn index_of(width: u32, name: &str) -> Result<usize, CascadeError> {
    polynomials_for(width)
        .and_then(|list| list.iter().position(|p| p.name == name))
        .ok_or_else(|| CascadeError::UnknownPolynomial(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOGUED_WIDTHS: [u32; 12] = [8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];

    #[test]
    fn every_width_has_eight_entries() {
        for width in CATALOGUED_WIDTHS {
            let list = polynomials_for(width).expect("catalogued width");
            assert_eq!(list.len(), POLYNOMIALS_PER_WIDTH);
        }
    }

    #[test]
    fn unknown_width_returns_none() {
        assert!(polynomials_for(9).is_none());
        assert!(polynomials_for(32).is_none());
    }

    #[test]
    fn index_of_matches_catalog_order() {
        let list = polynomials_for(8).unwrap();
        for (i, p) in list.iter().enumerate() {
            assert_eq!(index_of(8, p.name).unwrap(), i);
        }
    }

    #[test]
    fn index_of_unknown_name_fails() {
        let err = index_of(8, "does-not-exist").unwrap_err();
        assert!(matches!(err, CascadeError::UnknownPolynomial(_)));
    }

    #[test]
    fn poly_masked_drops_leading_bit() {
        let p = polynomials_for(8).unwrap()[0];
        assert_eq!(p.poly, 0x1cf);
        assert_eq!(p.poly_masked(), 0xcf);
    }

    #[test]
    fn first_8bit_polynomial_is_crc8f3() {
        assert_eq!(polynomials_for(8).unwrap()[0].name, "CRC-8F-3");
    }

    #[test]
    fn last_30bit_polynomial_is_crc30k312() {
        assert_eq!(polynomials_for(30).unwrap()[7].name, "CRC-30K-3.12");
    }
}
