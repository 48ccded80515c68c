//! Multiplicative release envelope.

/*
Tail-Off
========

When a key is released we do not want the note to stop dead: cutting a
waveform mid-cycle produces a click. Instead the voice fades out with a
tail-off, a gain that starts at 1.0 and is multiplied by a fixed decay
factor after every sample.

Vocabulary
----------

  gain        The current multiplier applied to the voice output.
              1.0 at the start of the release, shrinking every sample.

  decay       Per-sample multiplier, strictly between 0 and 1.
              0.99 means the gain loses 1% of its value each sample.

  threshold   Once the gain has fallen to this value (or below) the tail
              is over and the voice goes silent.


The Shape: Exponential Decay
----------------------------

  Gain
    1.0 ┐╲
        │ ╲
        │  ╲_
        │    ╲__
        │       ╲____
    thr ┼────────────╲──────  ← stop here
        └──────────────────→ Samples

After k samples the gain is decay^k. The tail ends on the first k where

    decay^k ≤ threshold
    k ≥ ln(threshold) / ln(decay)

With decay = 0.99 and threshold = 0.005:

    k = ceil(ln 0.005 / ln 0.99) = ceil(527.17) = 528 samples

That is ~11 ms at 48 kHz, and it does not depend on the note frequency.


Ordering
--------

The gain is used for the current sample first, THEN decayed, THEN checked.
So the first release sample is rendered at full gain 1.0, and the sample
that pushes the gain to the threshold is still rendered.
*/

/// Release envelope that decays multiplicatively each sample.
#[derive(Debug, Clone, Copy)]
pub struct TailOff {
    gain: f64,
    decay: f64,
    threshold: f64,
}

impl TailOff {
    /// Start a fresh tail at gain 1.0.
    pub fn new(decay: f64, threshold: f64) -> Self {
        debug_assert!(decay > 0.0 && decay < 1.0);
        Self {
            gain: 1.0,
            decay,
            threshold,
        }
    }

    /// Gain for the current sample. Call [`TailOff::advance`] after using it.
    #[inline]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Decay the gain by one sample. Returns `true` once the tail is finished.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.gain *= self.decay;
        self.is_finished()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.gain <= self.threshold
    }
}

/// Samples a tail renders before it finishes: `ceil(ln(threshold) / ln(decay))`.
///
/// # Example
/// ```
/// use tailoff::dsp::tail_off::tail_length;
/// assert_eq!(tail_length(0.99, 0.005), 528);
/// ```
pub fn tail_length(decay: f64, threshold: f64) -> usize {
    (threshold.ln() / decay.ln()).ceil() as usize
}
