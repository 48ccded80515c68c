//! Benchmarks for the multiplicative release envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tailoff::dsp::TailOff;

use crate::BLOCK_SIZES;

pub fn bench_tail_off(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/tail_off");

    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, &size| {
            b.iter(|| {
                let mut tail = TailOff::new(black_box(0.99), black_box(0.005));
                let mut acc = 0.0;
                for _ in 0..size {
                    acc += tail.gain();
                    if tail.advance() {
                        break;
                    }
                }
                acc
            })
        });
    }

    group.finish();
}
