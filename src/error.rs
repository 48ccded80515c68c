use std::fmt;

/// Rejected voice configuration.
///
/// Only construction and configuration APIs return this. Note events and
/// rendering never fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Gain must be finite and non-negative.
    InvalidGain(f64),
    /// Tail decay must lie strictly between 0 and 1.
    InvalidTailDecay(f64),
    /// Tail threshold must lie strictly between 0 and 1.
    InvalidTailThreshold(f64),
    /// Sample rate must be finite and positive.
    InvalidSampleRate(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGain(v) => write!(f, "gain must be finite and >= 0, got {v}"),
            ConfigError::InvalidTailDecay(v) => {
                write!(f, "tail decay must be in (0, 1), got {v}")
            }
            ConfigError::InvalidTailThreshold(v) => {
                write!(f, "tail threshold must be in (0, 1), got {v}")
            }
            ConfigError::InvalidSampleRate(v) => {
                write!(f, "sample rate must be finite and > 0, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_value() {
        let msg = ConfigError::InvalidTailDecay(1.5).to_string();
        assert!(msg.contains("tail decay"));
        assert!(msg.contains("1.5"));
    }
}
