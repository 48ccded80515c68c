/// Sound descriptor a host hands to a voice before starting a note.
///
/// There is one sound type: the waveform voice. It responds to every note on
/// every channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sound {
    #[default]
    Waveform,
}

impl Sound {
    pub fn applies_to_note(&self, _note: u8) -> bool {
        true
    }

    pub fn applies_to_channel(&self, _channel: u8) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_sound_covers_everything() {
        let sound = Sound::Waveform;
        assert!((0..=127).all(|note| sound.applies_to_note(note)));
        assert!((0..16).all(|channel| sound.applies_to_channel(channel)));
    }
}
