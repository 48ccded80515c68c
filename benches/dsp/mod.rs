//! Benchmarks for low-level DSP primitives.

mod tail_off;
mod waveform;

pub use tail_off::bench_tail_off;
pub use waveform::bench_waveform;
