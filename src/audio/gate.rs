//! One-time unlock latch in front of the audio sink

use tracing::debug;

use super::AudioSink;

/// Holds back playback until the first user interaction.
///
/// A play request made while locked is remembered and issued on
/// [`unlock`](AudioGate::unlock). Once unlocked the gate stays open.
pub struct AudioGate {
    sink: Box<dyn AudioSink>,
    unlocked: bool,
    pending: Option<bool>,
}

impl AudioGate {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            unlocked: false,
            pending: None,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Open the gate, playing any deferred request
    pub fn unlock(&mut self) {
        if self.unlocked {
            return;
        }
        debug!("Audio playback unlocked");
        self.unlocked = true;
        if let Some(looped) = self.pending.take() {
            self.sink.play(looped);
        }
    }

    pub fn play(&mut self, looped: bool) {
        if self.unlocked {
            self.sink.play(looped);
        } else {
            debug!("Audio still locked, deferring playback");
            self.pending = Some(looped);
        }
    }

    /// Pause and rewind, dropping any deferred request
    pub fn silence(&mut self) {
        self.pending = None;
        if self.unlocked {
            self.sink.pause();
            self.sink.rewind();
        }
    }
}
