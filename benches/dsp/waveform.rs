//! Benchmarks for the per-sample waveform generators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tailoff::{dsp::waveform::cycles_at_sample, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/waveform");
    let sample_rate = 48_000.0;
    let frequency = 440.0;

    for &size in BLOCK_SIZES {
        // Square and saw - fract plus a compare
        // Sign-of-sine and sine - sin() transcendental
        // Blend - all four generators per sample
        for waveform in Waveform::ALL {
            group.bench_with_input(BenchmarkId::new(waveform.name(), size), &size, |b, &size| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for n in 0..size as u64 {
                        let cycles = cycles_at_sample(n, black_box(frequency), sample_rate);
                        acc += waveform.sample(black_box(cycles));
                    }
                    acc
                })
            });
        }
    }

    group.finish();
}
