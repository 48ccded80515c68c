// Purpose: note lifecycle and the host-facing voice API
// This layer sits on top of the dsp primitives

pub mod config;
pub mod message;
pub mod mono;
pub mod sound;
pub mod voice;

pub use config::{VoiceConfig, Waveform};
pub use sound::Sound;
pub use voice::{Voice, VoiceState};
