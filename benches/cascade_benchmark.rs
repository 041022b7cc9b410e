use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crc_cascade::cascade::assign;
use crc_cascade::symbol::normalize;
use crc_cascade::width::select_width;

fn nyse_style_symbols(count: usize) -> Vec<Vec<u8>> {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut symbols = Vec::with_capacity(count);
    for mut n in 0..count {
        let mut digits = Vec::new();
        loop {
            let rem = n % 26;
            digits.push(ALPHABET[rem]);
            n /= 26;
            if n == 0 {
                break;
            }
            n -= 1;
        }
        digits.reverse();
        symbols.push(digits);
    }
    symbols
}

fn benchmark_cascade_at_nyse_scale(c: &mut Criterion) {
    let raw = nyse_style_symbols(65536);
    let normalized = normalize(&raw, 65536).unwrap();
    let w = select_width(65536).unwrap();

    let mut group = c.benchmark_group("cascade_assigner");
    group.sample_size(10);
    group.bench_function("nyse_65536_symbols", |b| {
        b.iter(|| assign(black_box(&normalized), w.crc_width, w.id_mask).unwrap())
    });
    group.finish();
}

criterion_group!(benches, benchmark_cascade_at_nyse_scale);
criterion_main!(benches);
