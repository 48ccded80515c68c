//! Pitch and phase bookkeeping helpers.

use std::f64::consts::TAU;

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
///
/// Defined for the full MIDI range 0..=127 (~8.18 Hz to ~12.5 kHz). Larger
/// values still produce a finite frequency but sit above Nyquist for common
/// sample rates.
#[inline]
pub fn midi_note_to_freq(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((note as f64 - 69.0) / 12.0)
}

/// Oscillator angle advance per sample, in radians: `2π f / sr`.
#[inline]
pub fn phase_increment(frequency: f64, sample_rate: f64) -> f64 {
    TAU * frequency / sample_rate
}

/// Number of samples in one cycle of `frequency`.
///
/// # Example
/// ```
/// use tailoff::dsp::pitch::samples_per_period;
/// assert_eq!(samples_per_period(440.0, 44_000.0), 100.0);
/// ```
#[inline]
pub fn samples_per_period(frequency: f64, sample_rate: f64) -> f64 {
    sample_rate / frequency
}
