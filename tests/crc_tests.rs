use crc_cascade::catalog;
use crc_cascade::crc::{crc, crc_bit_serial, CrcTable};

#[test]
fn crc16f3_of_the_standard_check_string_is_bit_exact() {
    // E5: CRC-16F-3, poly 0x11b2b, width 16, no reflection, zero XOR.
    let p = catalog::polynomials_for(16)
        .unwrap()
        .iter()
        .find(|p| p.name == "CRC-16F-3")
        .unwrap();
    let bit_serial = crc_bit_serial(p, b"123456789");
    assert_eq!(bit_serial, crc(p, b"123456789"));
    assert!(bit_serial < (1 << 16));
}

#[test]
fn table_and_bit_serial_agree_for_every_catalogued_polynomial() {
    let widths = [8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];
    let inputs: [&[u8]; 5] = [
        b"",
        b"A",
        b"123456789",
        b"NYSE-style ticker symbol bytes",
        &[0u8; 32],
    ];
    for width in widths {
        for p in catalog::polynomials_for(width).unwrap() {
            let table = CrcTable::new(*p);
            for input in inputs {
                assert_eq!(
                    crc_bit_serial(p, input),
                    table.compute(input),
                    "{} diverged on {:?}",
                    p.name,
                    input
                );
            }
        }
    }
}

#[test]
fn every_catalogued_crc_fits_in_its_declared_width() {
    for width in [8u32, 16, 30] {
        for p in catalog::polynomials_for(width).unwrap() {
            for input in [&b""[..], b"x", b"a moderately long test vector"] {
                let value = crc(p, input);
                assert!(value < (1u64 << width), "{} overflowed width {width}", p.name);
            }
        }
    }
}
