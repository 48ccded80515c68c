//! Signal math behind a tail-off voice.
//!
//! `waveform` maps a cycle position to a sample, `pitch` turns a MIDI note
//! into Hz and per-sample increments, and `tail_off` is the multiplicative
//! release gain. `Voice` calls all three once per rendered sample.

/// MIDI pitch and phase increment conversions.
pub mod pitch;
/// Multiplicative release envelope.
pub mod tail_off;
/// Pure waveform generators (square, sign-of-sine, saw, triangle, sine).
pub mod waveform;

pub use tail_off::TailOff;
