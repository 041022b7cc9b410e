#![no_main]

use libfuzzer_sys::fuzz_target;

use crc_cascade::symbol::normalize;

fuzz_target!(|data: &[u8]| {
    // Split the fuzzer input into arbitrary-length chunks and feed them
    // through the normalizer; it must never panic, only return an error for
    // over-length symbols or an over-large input set.
    let chunks: Vec<Vec<u8>> = data.chunks(7).map(|c| c.to_vec()).collect();
    let _ = normalize(&chunks, 4096);
});
