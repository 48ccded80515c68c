//! Voice configuration: gain, tail-off constants and waveform choice.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::waveform;
use crate::error::ConfigError;

/// Velocity-to-amplitude scale. A full-velocity note peaks at this level.
pub const DEFAULT_GAIN: f64 = 0.15;
/// Per-sample tail-off multiplier.
pub const DEFAULT_TAIL_DECAY: f64 = 0.99;
/// Tail-off gain at which a releasing voice goes idle.
pub const DEFAULT_TAIL_THRESHOLD: f64 = 0.005;

/// Which generator a voice renders.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Hard square from the period: +1 first half, -1 second half.
    #[default]
    Square,
    /// Sign of a sine. Same values as `Square`, different derivation.
    SignOfSine,
    Saw,
    Triangle,
    Sine,
    /// Mean of square, sine, saw and triangle.
    Blend,
}

impl Waveform {
    pub const ALL: [Waveform; 6] = [
        Waveform::Square,
        Waveform::SignOfSine,
        Waveform::Saw,
        Waveform::Triangle,
        Waveform::Sine,
        Waveform::Blend,
    ];

    /// Sample at cycle position `cycles` (periods since note-on), in [-1, 1].
    #[inline]
    pub fn sample(self, cycles: f64) -> f64 {
        match self {
            Waveform::Square => waveform::square(cycles),
            Waveform::SignOfSine => waveform::sign_of_sine_by_cycles(cycles),
            Waveform::Saw => waveform::saw_by_cycles(cycles, 1.0),
            Waveform::Triangle => waveform::triangle(cycles.fract()),
            Waveform::Sine => waveform::sine_by_cycles(cycles),
            Waveform::Blend => {
                (waveform::square(cycles)
                    + waveform::sine_by_cycles(cycles)
                    + waveform::saw_by_cycles(cycles, 1.0)
                    + waveform::triangle(cycles.fract()))
                    / 4.0
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Square => "square",
            Waveform::SignOfSine => "signofsine",
            Waveform::Saw => "saw",
            Waveform::Triangle => "triangle",
            Waveform::Sine => "sine",
            Waveform::Blend => "blend",
        }
    }

    /// Parse a waveform name as written by [`Waveform::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "square" => Some(Waveform::Square),
            "signofsine" | "sign-of-sine" => Some(Waveform::SignOfSine),
            "saw" | "sawtooth" => Some(Waveform::Saw),
            "triangle" => Some(Waveform::Triangle),
            "sine" => Some(Waveform::Sine),
            "blend" => Some(Waveform::Blend),
            _ => None,
        }
    }
}

/// Constants a voice owns for its lifetime.
///
/// # Example
/// ```
/// use tailoff::synth::config::{VoiceConfig, Waveform};
///
/// let config = VoiceConfig::default()
///     .with_waveform(Waveform::Triangle)
///     .with_gain(0.25);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceConfig {
    /// Amplitude per unit velocity.
    pub gain: f64,
    /// Per-sample tail-off multiplier, in (0, 1).
    pub tail_decay: f64,
    /// Tail-off gain at which the voice goes idle, in (0, 1).
    pub tail_threshold: f64,
    pub waveform: Waveform,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            gain: DEFAULT_GAIN,
            tail_decay: DEFAULT_TAIL_DECAY,
            tail_threshold: DEFAULT_TAIL_THRESHOLD,
            waveform: Waveform::default(),
        }
    }
}

impl VoiceConfig {
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    pub fn with_tail_decay(mut self, decay: f64) -> Self {
        self.tail_decay = decay;
        self
    }

    pub fn with_tail_threshold(mut self, threshold: f64) -> Self {
        self.tail_threshold = threshold;
        self
    }

    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = if !self.gain.is_finite() || self.gain < 0.0 {
            Err(ConfigError::InvalidGain(self.gain))
        } else if !open_unit(self.tail_decay) {
            Err(ConfigError::InvalidTailDecay(self.tail_decay))
        } else if !open_unit(self.tail_threshold) {
            Err(ConfigError::InvalidTailThreshold(self.tail_threshold))
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            log::warn!("rejected voice config: {err}");
        }
        result
    }
}

/// Validate a host sample rate.
pub fn check_sample_rate(sample_rate: f64) -> Result<(), ConfigError> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        log::warn!("rejected sample rate {sample_rate}");
        Err(ConfigError::InvalidSampleRate(sample_rate))
    }
}

#[inline]
fn open_unit(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = VoiceConfig::default();
        assert_eq!(config.gain, 0.15);
        assert_eq!(config.tail_decay, 0.99);
        assert_eq!(config.tail_threshold, 0.005);
        assert_eq!(config.waveform, Waveform::Square);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base = VoiceConfig::default();
        assert_eq!(
            base.with_gain(-0.1).validate(),
            Err(ConfigError::InvalidGain(-0.1))
        );
        assert!(matches!(
            base.with_gain(f64::NAN).validate(),
            Err(ConfigError::InvalidGain(_))
        ));
        assert_eq!(
            base.with_tail_decay(1.0).validate(),
            Err(ConfigError::InvalidTailDecay(1.0))
        );
        assert_eq!(
            base.with_tail_decay(0.0).validate(),
            Err(ConfigError::InvalidTailDecay(0.0))
        );
        assert_eq!(
            base.with_tail_threshold(1.2).validate(),
            Err(ConfigError::InvalidTailThreshold(1.2))
        );
    }

    #[test]
    fn zero_gain_is_allowed() {
        assert!(VoiceConfig::default().with_gain(0.0).validate().is_ok());
    }

    #[test]
    fn sample_rate_must_be_positive() {
        assert!(check_sample_rate(48_000.0).is_ok());
        assert!(check_sample_rate(0.0).is_err());
        assert!(check_sample_rate(-44_100.0).is_err());
        assert!(check_sample_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn names_round_trip() {
        for waveform in Waveform::ALL {
            assert_eq!(Waveform::from_name(waveform.name()), Some(waveform));
        }
        assert_eq!(Waveform::from_name("sawtooth"), Some(Waveform::Saw));
        assert_eq!(Waveform::from_name("noise"), None);
    }

    #[test]
    fn every_strategy_stays_in_range() {
        for waveform in Waveform::ALL {
            for n in 0..1_000 {
                let value = waveform.sample(waveform::cycles_at_sample(n, 330.0, 44_100.0));
                assert!(
                    (-1.0..=1.0).contains(&value),
                    "{} out of range: {value}",
                    waveform.name()
                );
            }
        }
    }

    #[test]
    fn blend_averages_the_four_generators() {
        let (t, f) = (0.0013, 440.0);
        let expected = (waveform::square_by_time(t, f)
            + waveform::sine(t, f)
            + waveform::saw(t, f, 1.0)
            + waveform::triangle_by_time(t, f))
            / 4.0;
        assert_eq!(Waveform::Blend.sample(t * f), expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let config: VoiceConfig =
            serde_json::from_str(r#"{ "waveform": "triangle", "gain": 0.3 }"#).unwrap();
        assert_eq!(config.waveform, Waveform::Triangle);
        assert_eq!(config.gain, 0.3);
        assert_eq!(config.tail_decay, DEFAULT_TAIL_DECAY);
    }
}
