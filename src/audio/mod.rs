//! Alarm audio output
//!
//! The controller only talks to [`AudioSink`]. Backends decide what
//! "playing" means: ringing the terminal bell or running an external
//! player command.

pub mod bell;
pub mod command;
pub mod gate;

pub use bell::TerminalBell;
pub use command::CommandAlarm;
pub use gate::AudioGate;

/// Best-effort audio device. Implementations log failures instead of
/// returning them; a broken speaker never changes the timer phase.
pub trait AudioSink: Send {
    /// Start playback from the current position, repeating if `looped`
    fn play(&mut self, looped: bool);
    fn pause(&mut self);
    /// Move the playback position back to the start
    fn rewind(&mut self);
}

/// Choose the audio backend for an optional player command
pub fn backend_for(command: Option<&str>) -> Box<dyn AudioSink> {
    match command {
        Some(cmd) if !cmd.trim().is_empty() => Box::new(CommandAlarm::new(cmd)),
        _ => Box::new(TerminalBell::new()),
    }
}
