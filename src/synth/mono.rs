use crate::{
    error::ConfigError,
    io::OutputBuffer,
    synth::{
        config::VoiceConfig,
        message::{velocity_to_unit, MessageReceiver, SynthMessage},
        voice::Voice,
    },
};

/// One voice driven by a message queue.
///
/// Pending messages are applied at the start of each block, then the voice
/// renders. A new note-on retriggers the voice; there is no note stack.
pub struct MonoSynth<R: MessageReceiver> {
    voice: Voice,
    rx: R,
    frame_counter: u64,
}

impl<R: MessageReceiver> MonoSynth<R> {
    pub fn new(config: VoiceConfig, sample_rate: f64, rx: R) -> Result<Self, ConfigError> {
        let voice = Voice::with_config(config, sample_rate)?;
        log::debug!("mono synth ready at {sample_rate} Hz");

        Ok(Self {
            voice,
            rx,
            frame_counter: 0,
        })
    }

    /// Apply queued messages, then add `num_samples` of the voice into `buffer`.
    pub fn render_block<B>(&mut self, buffer: &mut B, start_sample: usize, num_samples: usize)
    where
        B: OutputBuffer + ?Sized,
    {
        while let Some(msg) = self.rx.pop() {
            self.handle(msg);
        }

        let rendered = self.voice.render_next_block(buffer, start_sample, num_samples);
        self.frame_counter += rendered as u64;
    }

    fn handle(&mut self, msg: SynthMessage) {
        match msg {
            // Running-status convention: velocity 0 means release
            SynthMessage::NoteOn { note, velocity: 0 } => self.release(note, 0),
            SynthMessage::NoteOn { note, velocity } => {
                self.voice.start_note(note, velocity_to_unit(velocity));
            }
            SynthMessage::NoteOff { note, velocity } => self.release(note, velocity),
            SynthMessage::AllNotesOff => self.voice.stop_note(0.0, true),
            SynthMessage::AllSoundOff => self.voice.stop_note(0.0, false),
        }
    }

    fn release(&mut self, note: u8, velocity: u8) {
        if self.voice.note() == Some(note) {
            self.voice.stop_note(velocity_to_unit(velocity), true);
        }
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    /// Samples the voice has written since construction. Idle blocks and
    /// the silent remainder after a tail ends are not counted.
    pub fn frames_rendered(&self) -> u64 {
        self.frame_counter
    }
}
