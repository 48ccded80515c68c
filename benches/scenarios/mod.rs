//! Real-world scenario benchmarks.
//!
//! These model what a host does every callback: render a voice block into
//! a multi-channel buffer.

mod voice;

pub use voice::bench_voice;
