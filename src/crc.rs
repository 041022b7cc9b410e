//! # CRC Engine
//!
//! Computes a CRC value for a byte string under a given [`PolynomialParams`].
//! Two equivalent implementations are provided: [`crc_bit_serial`], a direct
//! transcription of the canonical bit-by-bit algorithm, and [`CrcTable`], a
//! 256-entry lookup table built once per polynomial and reused across many
//! symbols. Both honor `reflect_in`, `reflect_out`, `xor_in`, and `xor_out`
//! even though every catalogued entry currently sets them to `false`/`0`.

use crate::catalog::PolynomialParams;
use crate::util::bitrev::rev8;

fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Reflect the low `width` bits of `value`.
fn reflect(value: u64, width: u32) -> u64 {
    let mut out = 0u64;
    for i in 0..width {
        if value & (1 << i) != 0 {
            out |= 1 << (width - 1 - i);
        }
    }
    out
}

/// Reference implementation: bit-by-bit, MSB-first, exactly as specified.
///
/// Slower than [`CrcTable`] but used to validate the table-driven path in
/// tests and benchmarks.
pub fn crc_bit_serial(params: &PolynomialParams, data: &[u8]) -> u64 {
    let width = params.width;
    let m = mask(width);
    let poly = params.poly_masked();
    let topbit = 1u64 << (width - 1);
    let mut reg = params.xor_in & m;

    for &raw_byte in data {
        let byte = if params.reflect_in { rev8(raw_byte) } else { raw_byte };
        reg ^= (byte as u64) << (width - 8);
        for _ in 0..8 {
            reg = if reg & topbit != 0 {
                (reg << 1) ^ poly
            } else {
                reg << 1
            };
            reg &= m;
        }
    }

    if params.reflect_out {
        reg = reflect(reg, width);
    }
    (reg ^ params.xor_out) & m
}

/// A precomputed 256-entry lookup table for one polynomial, built once and
/// reused across every symbol hashed under that polynomial in a cascade
/// pass.
#[derive(Debug, Clone)]
pub struct CrcTable {
    params: PolynomialParams,
    table: [u32; 256],
}

impl CrcTable {
    /// Builds the table for `params`. `params.width` must be in `8..=30`
    /// (true of every catalogued entry).
    pub fn new(params: PolynomialParams) -> Self {
        let width = params.width;
        let m = mask(width) as u32;
        let poly = params.poly_masked() as u32;
        let mut table = [0u32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut reg = (i as u32) << (width - 8);
            for _ in 0..8 {
                let top = (reg >> (width - 1)) & 1;
                reg <<= 1;
                if top == 1 {
                    reg ^= poly;
                }
                reg &= m;
            }
            *entry = reg;
        }
        CrcTable { params, table }
    }

    /// Computes the CRC of `data` using the cached table. Must match
    /// [`crc_bit_serial`] for the same parameters and input.
    pub fn compute(&self, data: &[u8]) -> u64 {
        let width = self.params.width;
        let m = mask(width) as u32;
        let mut reg = (self.params.xor_in & m as u64) as u32;

        for &raw_byte in data {
            let byte = if self.params.reflect_in {
                rev8(raw_byte)
            } else {
                raw_byte
            };
            let idx = (((reg >> (width - 8)) ^ byte as u32) & 0xFF) as usize;
            reg = ((reg << 8) ^ self.table[idx]) & m;
        }

        let mut result = reg as u64;
        if self.params.reflect_out {
            result = reflect(result, width);
        }
        (result ^ self.params.xor_out) & m as u64
    }
}

/// Computes the CRC of `data` under `params`, building a fresh table each
/// call. Prefer [`CrcTable`] when hashing many symbols under the same
/// polynomial.
pub fn crc(params: &PolynomialParams, data: &[u8]) -> u64 {
    CrcTable::new(*params).compute(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn params(width: u32, name: &str) -> PolynomialParams {
        *catalog::polynomials_for(width)
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .unwrap()
    }

    #[test]
    fn table_driven_matches_bit_serial_for_every_catalogued_polynomial() {
        let widths = [8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];
        let inputs: [&[u8]; 4] = [b"", b"A", b"123456789", b"a longer symbol of bytes"];
        for width in widths {
            for p in catalog::polynomials_for(width).unwrap() {
                let table = CrcTable::new(*p);
                for input in inputs {
                    assert_eq!(
                        crc_bit_serial(p, input),
                        table.compute(input),
                        "mismatch for {} on {:?}",
                        p.name,
                        input
                    );
                }
            }
        }
    }

    #[test]
    fn crc16f3_of_123456789() {
        // CRC-16F-3: poly 0x11b2b, width 16, no reflection, zero XOR (E5).
        let p = params(16, "CRC-16F-3");
        let value = crc_bit_serial(&p, b"123456789");
        assert_eq!(value, crc(&p, b"123456789"));
        assert!(value < (1u64 << 16));
    }

    #[test]
    fn crc_is_deterministic() {
        let p = params(8, "CRC-8F-3");
        let a = crc(&p, b"hello");
        let b = crc(&p, b"hello");
        assert_eq!(a, b);
    }

    #[test]
    fn crc_fits_in_width() {
        for width in [8u32, 16, 30] {
            for p in catalog::polynomials_for(width).unwrap() {
                let value = crc(p, b"some test bytes of moderate length");
                assert!(value < (1u64 << width));
            }
        }
    }
}
