//! Stateless per-sample waveform generators.

use std::f64::consts::TAU;

/*
Waveforms as Functions of Cycle Position
========================================

Every generator in this module is a pure function. The core form takes the
cycle position, the number of periods elapsed since the note started:

    cycles = elapsed_samples × frequency / sample_rate

and returns the sample value in [-1.0, +1.0]. No phase accumulator is
carried between calls, so there is nothing to drift and nothing to reset.

The `*_by_time` forms take seconds and frequency and compute
`cycles = t × frequency`. They are convenient, but `t` itself is already
rounded, so a sample that sits exactly on an edge (n × f / sr an exact
half-integer) can land on either side. The voice always uses the cycle
form, computed from its integer sample count: there `n × f` is exact and a
single division places every edge on the correct sample, in every period.

Vocabulary
----------

  period        Time for one complete cycle: 1 / frequency.
                At 440 Hz the period is ~2.27 ms.

  cycles        Periods elapsed since note-on. Integer part counts whole
                cycles, fractional part says where we are in this one.

  phase         The fractional part of cycles, in [0, 1).
                Most shapes are easiest to describe in terms of phase.


The Shapes
----------

SQUARE
    +1 for the first half of the period, -1 for the second half.

    +1 ┌────┐    ┌────┐
       │    │    │    │
    -1 ┘    └────┘    └────

SIGN OF SINE
    The sign of sin(2π × phase). Same values as the square, derived from the
    sine instead of the period. Both exist so either can be tested and
    selected on its own.

SAW
    Linear ramp from -1 at the start of each period to +1 at its end, then
    a hard reset.

    +1    ╱│   ╱│
         ╱ │  ╱ │
    -1  ╱  │ ╱  │

TRIANGLE
    Piecewise linear over the normalized phase:

      [0.00, 0.25)  rises  0 → +1   (phase × 4)
      [0.25, 0.75)  falls +1 → -1   (2 - phase × 4)
      [0.75, 1.00)  rises -1 →  0   (phase × 4 - 4)

    The breakpoints are exact: triangle(0.25) = +1, triangle(0.75) = -1.


The Sign Rule
-------------

sign(x) maps zero to +1, not 0. The square and sign-of-sine generators
rely on this: the first sample of every note (cycles = 0) is +1.

None of these shapes are band-limited. At high pitches the hard edges alias.
*/

/// +1.0 for `value >= 0.0`, -1.0 otherwise. Zero maps to +1.0.
#[inline]
pub fn sign(value: f64) -> f64 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Cycle position for sample `n` of a note: `n × f / sr`.
#[inline]
pub fn cycles_at_sample(n: u64, frequency: f64, sample_rate: f64) -> f64 {
    n as f64 * frequency / sample_rate
}

/// Position inside the current cycle at time `t`, normalized to [0, 1).
#[inline]
pub fn phase_fraction(t: f64, frequency: f64) -> f64 {
    (t * frequency).fract()
}

/// +1 for the first half of each cycle, -1 for the second.
#[inline]
pub fn square(cycles: f64) -> f64 {
    if cycles.fract() < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Hard-edged square at time `t`: +1 for the first half of each period, -1 for the second.
#[inline]
pub fn square_by_time(t: f64, frequency: f64) -> f64 {
    square(t * frequency)
}

#[inline]
pub fn sine_by_cycles(cycles: f64) -> f64 {
    (TAU * cycles.fract()).sin()
}

/// Sign of `sin(2π × cycles)`.
#[inline]
pub fn sign_of_sine_by_cycles(cycles: f64) -> f64 {
    sign(sine_by_cycles(cycles))
}

/// Sign of `sin(2π f t)`.
#[inline]
pub fn sign_of_sine(t: f64, frequency: f64) -> f64 {
    sign_of_sine_by_cycles(t * frequency)
}

/// Linear ramp from -level to +level across each cycle.
#[inline]
pub fn saw_by_cycles(cycles: f64, level: f64) -> f64 {
    level * (cycles.fract() * 2.0 - 1.0)
}

/// Linear ramp from -level to +level across each period.
#[inline]
pub fn saw(t: f64, frequency: f64, level: f64) -> f64 {
    saw_by_cycles(t * frequency, level)
}

/// Piecewise-linear triangle over a phase normalized to [0, 1].
///
/// `triangle(1.0)` wraps to the same value as `triangle(0.0)`.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    if phase < 0.25 {
        phase * 4.0
    } else if phase < 0.75 {
        2.0 - phase * 4.0
    } else {
        phase * 4.0 - 4.0
    }
}

/// Triangle evaluated at time `t` for a note at `frequency`.
#[inline]
pub fn triangle_by_time(t: f64, frequency: f64) -> f64 {
    triangle(phase_fraction(t, frequency))
}

#[inline]
pub fn sine(t: f64, frequency: f64) -> f64 {
    sine_by_cycles(t * frequency)
}
