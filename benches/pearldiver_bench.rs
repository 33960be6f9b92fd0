//! Benchmark for the bit-sliced nonce search

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pearldiver::{PearlDiver, SlicedState, Trit, HASH_LENGTH, TRANSACTION_LENGTH};

fn deterministic_trits(seed: u64, len: usize) -> Vec<Trit> {
    let mut z = seed;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut x = z;
        x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        x ^= x >> 31;
        out.push((x % 3) as Trit - 1);
    }
    out
}

fn bench_transform(c: &mut Criterion) {
    let block = deterministic_trits(1, HASH_LENGTH);
    let mut base = SlicedState::new();
    base.absorb(&block);

    c.bench_function("sliced_transform", |b| {
        b.iter(|| {
            let mut state = base.clone();
            state.transform();
            black_box(state.pair(0))
        })
    });
}

fn bench_magnitude_9_workers_1(c: &mut Criterion) {
    let trits = deterministic_trits(2, TRANSACTION_LENGTH);
    let diver = PearlDiver::with_workers(1);

    c.bench_function("search_m9_w1", |b| {
        b.iter(|| {
            let mut tx = trits.clone();
            diver.search(black_box(&mut tx), 9).unwrap();
            tx
        })
    });
}

fn bench_magnitude_9_workers_4(c: &mut Criterion) {
    let trits = deterministic_trits(2, TRANSACTION_LENGTH);
    let diver = PearlDiver::with_workers(4);

    c.bench_function("search_m9_w4", |b| {
        b.iter(|| {
            let mut tx = trits.clone();
            diver.search(black_box(&mut tx), 9).unwrap();
            tx
        })
    });
}

criterion_group!(
    benches,
    bench_transform,
    bench_magnitude_9_workers_1,
    bench_magnitude_9_workers_4
);
criterion_main!(benches);
