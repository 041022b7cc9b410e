use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crc_cascade::catalog;
use crc_cascade::crc::{crc_bit_serial, CrcTable};

const INPUT: &[u8] = b"AAPL";

fn benchmark_crc_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc_engine");
    let p = catalog::polynomials_for(16)
        .unwrap()
        .iter()
        .find(|p| p.name == "CRC-16F-3")
        .unwrap();
    let table = CrcTable::new(*p);

    group.bench_function(BenchmarkId::new("bit_serial", "CRC-16F-3"), |b| {
        b.iter(|| crc_bit_serial(p, black_box(INPUT)))
    });
    group.bench_function(BenchmarkId::new("table_driven", "CRC-16F-3"), |b| {
        b.iter(|| table.compute(black_box(INPUT)))
    });
    group.finish();
}

criterion_group!(benches, benchmark_crc_engine);
criterion_main!(benches);
