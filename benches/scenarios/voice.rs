//! Benchmarks for complete voice blocks.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tailoff::{AudioOutput, Voice, VoiceConfig, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");
    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let mut stereo = AudioOutput::new(2, size);

        // === SOUNDING ===
        // Default square voice, held note, stereo output
        let mut voice = Voice::new(sample_rate).expect("valid sample rate");
        voice.start_note(45, 0.8); // A2, typical bass note
        group.bench_with_input(BenchmarkId::new("square_held", size), &size, |b, &size| {
            b.iter(|| {
                voice.render_next_block(black_box(&mut stereo), 0, size);
            })
        });

        // === BLEND ===
        // Worst case: four generators per sample
        let config = VoiceConfig::default().with_waveform(Waveform::Blend);
        let mut voice = Voice::with_config(config, sample_rate).expect("valid config");
        voice.start_note(45, 0.8);
        group.bench_with_input(BenchmarkId::new("blend_held", size), &size, |b, &size| {
            b.iter(|| {
                voice.render_next_block(black_box(&mut stereo), 0, size);
            })
        });

        // === RELEASING ===
        // Retrigger and release every iteration so the tail is always live
        let mut voice = Voice::new(sample_rate).expect("valid sample rate");
        group.bench_with_input(BenchmarkId::new("square_release", size), &size, |b, &size| {
            b.iter(|| {
                voice.start_note(45, 0.8);
                voice.stop_note(0.0, true);
                voice.render_next_block(black_box(&mut stereo), 0, size);
            })
        });

        // === IDLE ===
        // Early-out cost for voices the host has not freed
        let mut voice = Voice::new(sample_rate).expect("valid sample rate");
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, &size| {
            b.iter(|| {
                voice.render_next_block(black_box(&mut stereo), 0, size);
            })
        });
    }

    group.finish();
}
