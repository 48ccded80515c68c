pub mod dsp;
pub mod error;
pub mod io;
pub mod synth; // Voice lifecycle and host shim

pub use error::ConfigError;
pub use io::{AudioOutput, OutputBuffer};
pub use synth::{Sound, Voice, VoiceConfig, VoiceState, Waveform};

pub const MAX_BLOCK_SIZE: usize = 2048;
