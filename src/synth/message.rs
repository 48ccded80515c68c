use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Note events delivered to a synth from a control thread.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynthMessage {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8, velocity: u8 },
    /// Release whatever is playing, with tail-off.
    AllNotesOff,
    /// Silence immediately, no tail-off.
    AllSoundOff,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline and test queue. Not realtime-safe to push into from another thread.
impl MessageReceiver for VecDeque<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        self.pop_front()
    }
}

/// Scale a 7-bit MIDI velocity to [0, 1].
#[inline]
pub fn velocity_to_unit(velocity: u8) -> f32 {
    velocity.min(127) as f32 / 127.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_scaling() {
        assert_eq!(velocity_to_unit(0), 0.0);
        assert_eq!(velocity_to_unit(127), 1.0);
        assert_eq!(velocity_to_unit(255), 1.0);
        assert!((velocity_to_unit(64) - 0.503_937).abs() < 1e-5);
    }

    #[test]
    fn deque_pops_in_order() {
        let mut queue: VecDeque<SynthMessage> = [
            SynthMessage::NoteOn { note: 60, velocity: 100 },
            SynthMessage::AllNotesOff,
        ]
        .into();
        assert_eq!(
            MessageReceiver::pop(&mut queue),
            Some(SynthMessage::NoteOn { note: 60, velocity: 100 })
        );
        assert_eq!(MessageReceiver::pop(&mut queue), Some(SynthMessage::AllNotesOff));
        assert_eq!(MessageReceiver::pop(&mut queue), None);
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn ring_buffer_receiver() {
        let (mut tx, mut rx) = rtrb::RingBuffer::<SynthMessage>::new(4);
        tx.push(SynthMessage::AllSoundOff).unwrap();
        assert_eq!(MessageReceiver::pop(&mut rx), Some(SynthMessage::AllSoundOff));
        assert_eq!(MessageReceiver::pop(&mut rx), None);
    }
}
