#![no_main]

use libfuzzer_sys::fuzz_target;

use crc_cascade::catalog;
use crc_cascade::crc::{crc_bit_serial, CrcTable};

fuzz_target!(|data: &[u8]| {
    for width in [8u32, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30] {
        for p in catalog::polynomials_for(width).unwrap() {
            let table = CrcTable::new(*p);
            assert_eq!(crc_bit_serial(p, data), table.compute(data));
        }
    }
});
