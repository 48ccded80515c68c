//! Single-note rendering unit: lifecycle, pitch and tail-off.

use crate::{
    dsp::{pitch, waveform, TailOff},
    error::ConfigError,
    io::OutputBuffer,
    synth::{
        config::{check_sample_rate, VoiceConfig, Waveform},
        sound::Sound,
    },
};

/*
Voice Lifecycle
===============

    ┌──────┐  start_note   ┌──────────┐  stop_note(tail)  ┌───────────┐
    │ Idle │ ────────────→ │ Sounding │ ────────────────→ │ Releasing │
    └──────┘               └──────────┘                   └───────────┘
       ↑  ↑                     │                               │
       │  │  stop_note(no tail) │                               │
       │  └─────────────────────┘                               │
       │                                                        │
       │       tail gain ≤ threshold (inside render)            │
       └────────────────────────────────────────────────────────┘

start_note from Sounding or Releasing restarts the note in place.
stop_note(no tail) from Releasing also goes straight to Idle.

Idle is exactly "phase increment is zero". Rendering an idle voice touches
nothing.

Each rendered sample is

    level × waveform(cycles) × tail gain

where cycles = samples since note-on × frequency / sample rate, and the
tail gain is 1.0 while Sounding. Samples are ADDED to every channel of the host buffer.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,      // Available for reuse, renders nothing
    Sounding,  // Note held
    Releasing, // Note released, tail-off decaying
}

/// A single monophonic voice.
#[derive(Debug, Clone)]
pub struct Voice {
    config: VoiceConfig,
    sample_rate: f64,
    /// Sample rate captured at note-on.
    note_sample_rate: f64,
    /// Generator captured at note-on.
    note_waveform: Waveform,
    state: VoiceState,
    note: Option<u8>,
    frequency: f64,
    phase_increment: f64,
    /// Samples rendered since note-on. The cycle position is derived from
    /// this rather than accumulated, so long notes do not drift.
    elapsed: u64,
    level: f64,
    tail: Option<TailOff>,
}

impl Voice {
    /// Idle voice with the default configuration.
    pub fn new(sample_rate: f64) -> Result<Self, ConfigError> {
        Self::with_config(VoiceConfig::default(), sample_rate)
    }

    pub fn with_config(config: VoiceConfig, sample_rate: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        check_sample_rate(sample_rate)?;
        log::debug!("voice created: {config:?} at {sample_rate} Hz");

        Ok(Self {
            config,
            sample_rate,
            note_sample_rate: sample_rate,
            note_waveform: config.waveform,
            state: VoiceState::Idle,
            note: None,
            frequency: 0.0,
            phase_increment: 0.0,
            elapsed: 0,
            level: 0.0,
            tail: None,
        })
    }

    /// Whether this voice can render `sound`.
    pub fn can_play_sound(&self, sound: &Sound) -> bool {
        matches!(sound, Sound::Waveform)
    }

    /// Change the host sample rate. A note already playing keeps the rate it
    /// started with; the new rate applies from the next `start_note`.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), ConfigError> {
        check_sample_rate(sample_rate)?;
        log::debug!("voice sample rate {} -> {sample_rate} Hz", self.sample_rate);
        self.sample_rate = sample_rate;
        Ok(())
    }

    /// Select the generator. A note already playing keeps the waveform it
    /// started with; the new one applies from the next `start_note`.
    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.config.waveform = waveform;
    }

    /// Begin (or restart) a note.
    ///
    /// `velocity` is clamped to [0, 1]; non-finite velocity plays silently.
    pub fn start_note(&mut self, note: u8, velocity: f32) {
        let frequency = pitch::midi_note_to_freq(note);

        self.note = Some(note);
        self.frequency = frequency;
        self.note_sample_rate = self.sample_rate;
        self.note_waveform = self.config.waveform;
        self.phase_increment = pitch::phase_increment(frequency, self.note_sample_rate);
        self.elapsed = 0;
        self.level = sanitize_velocity(velocity) * self.config.gain;
        self.tail = None;
        self.state = VoiceState::Sounding;
    }

    /// Release the note.
    ///
    /// With `allow_tail_off` the voice fades out over the following render
    /// calls; repeated calls while releasing do nothing. Without it the voice
    /// goes idle at once and the next render call writes nothing.
    pub fn stop_note(&mut self, _velocity: f32, allow_tail_off: bool) {
        match (self.state, allow_tail_off) {
            (VoiceState::Idle, _) => {}
            (VoiceState::Sounding, true) => {
                self.tail = Some(TailOff::new(
                    self.config.tail_decay,
                    self.config.tail_threshold,
                ));
                self.state = VoiceState::Releasing;
            }
            (VoiceState::Releasing, true) => {}
            (_, false) => self.clear_note(),
        }
    }

    /// Add `num_samples` samples into every channel of `buffer`, starting at
    /// `start_sample`.
    ///
    /// Realtime-safe: no allocation, no locking. A releasing voice may finish
    /// part-way through the block, leaving the rest of the block untouched.
    ///
    /// Returns the number of samples actually written: 0 while idle, fewer
    /// than `num_samples` when the tail ends inside the block.
    pub fn render_next_block<B>(
        &mut self,
        buffer: &mut B,
        start_sample: usize,
        num_samples: usize,
    ) -> usize
    where
        B: OutputBuffer + ?Sized,
    {
        if self.phase_increment == 0.0 {
            return 0;
        }

        debug_assert!(
            start_sample + num_samples <= buffer.num_samples(),
            "render range {}..{} exceeds buffer of {} samples",
            start_sample,
            start_sample + num_samples,
            buffer.num_samples()
        );
        let end = (start_sample + num_samples).min(buffer.num_samples());
        let channels = buffer.num_channels();
        let mut rendered = 0;

        for index in start_sample..end {
            let cycles =
                waveform::cycles_at_sample(self.elapsed, self.frequency, self.note_sample_rate);
            let gain = self.tail.map_or(1.0, |tail| tail.gain());
            let value = (self.level * gain * self.note_waveform.sample(cycles)) as f32;

            for channel in 0..channels {
                buffer.add_sample(channel, index, value);
            }

            self.elapsed += 1;
            rendered += 1;

            let finished = self.tail.as_mut().is_some_and(|tail| tail.advance());
            if finished {
                self.clear_note();
                break;
            }
        }

        rendered
    }

    fn clear_note(&mut self) {
        self.state = VoiceState::Idle;
        self.note = None;
        self.frequency = 0.0;
        self.phase_increment = 0.0;
        self.elapsed = 0;
        self.level = 0.0;
        self.tail = None;
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == VoiceState::Idle
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, VoiceState::Sounding | VoiceState::Releasing)
    }

    /// MIDI note currently sounding or releasing.
    pub fn note(&self) -> Option<u8> {
        self.note
    }

    /// Note frequency in Hz, 0.0 while idle.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Radians per sample, 0.0 while idle.
    pub fn phase_increment(&self) -> f64 {
        self.phase_increment
    }

    /// Amplitude from the note-on velocity.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Tail-off gain while releasing.
    pub fn envelope(&self) -> Option<f64> {
        self.tail.map(|tail| tail.gain())
    }

    pub fn elapsed_samples(&self) -> u64 {
        self.elapsed
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn config(&self) -> &VoiceConfig {
        &self.config
    }
}

#[inline]
fn sanitize_velocity(velocity: f32) -> f64 {
    if velocity.is_finite() {
        velocity.clamp(0.0, 1.0) as f64
    } else {
        0.0
    }
}
