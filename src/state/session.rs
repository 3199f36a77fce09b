//! Countdown session state machine
//!
//! ```text
//!  Initial  ──start(n > 0)──►  Running
//!  Running  ──pause─────────►  Paused   ──start──►  Running
//!  Running  ──tick to 0─────►  AlarmRinging (sound on) | Finished (sound off)
//!  Finished ──start(n > 0)──►  Running
//!  AlarmRinging ──stop_alarm─► Initial
//!  any      ──reset─────────►  Initial
//!  not Running/AlarmRinging ──preset──► Initial
//! ```
//!
//! The session performs no I/O. Every operation returns the [`Effect`]s
//! the owner must carry out: render, arm or cancel the tick source, or
//! drive the alarm.

use serde::Serialize;
use tracing::{debug, info};

use super::Phase;
use crate::codec::{to_parts, TimeParts};

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show this time on the display
    Render(TimeParts),
    /// Arm the tick source for the given run epoch
    StartTicking { epoch: u64 },
    /// Cancel the tick source
    StopTicking,
    PlayAlarm { looped: bool },
    /// Pause the alarm and rewind it to the start
    SilenceAlarm,
}

/// The one countdown owned by the controller
#[derive(Debug, Clone)]
pub struct TimerSession {
    remaining: u64,
    last_set_time: u64,
    phase: Phase,
    sound_enabled: bool,
    /// Bumped on every entry into Running; ticks from older epochs are stale
    epoch: u64,
}

/// Read-only copy of the session fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub remaining: u64,
    pub last_set_time: u64,
    pub phase: Phase,
    pub sound_enabled: bool,
}

impl TimerSession {
    pub fn new(sound_enabled: bool) -> Self {
        Self {
            remaining: 0,
            last_set_time: 0,
            phase: Phase::Initial,
            sound_enabled,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn last_set_time(&self) -> u64 {
        self.last_set_time
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Epoch of the current (or most recent) run
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            remaining: self.remaining,
            last_set_time: self.last_set_time,
            phase: self.phase,
            sound_enabled: self.sound_enabled,
        }
    }

    /// Start a fresh countdown or resume a paused one.
    ///
    /// `requested` is only read when not resuming.
    pub fn start(&mut self, requested: i64) -> Vec<Effect> {
        match self.phase {
            Phase::Initial | Phase::Finished => {
                if requested <= 0 {
                    debug!("Ignoring start with non-positive duration {}", requested);
                    self.remaining = 0;
                    self.phase = Phase::Initial;
                    return vec![Effect::Render(TimeParts::zero())];
                }
                let requested = requested as u64;
                self.remaining = requested;
                self.last_set_time = requested;
                info!("Starting countdown from {}", to_parts(requested));
                self.enter_running()
            }
            Phase::Paused => {
                info!("Resuming countdown at {}", to_parts(self.remaining));
                self.enter_running()
            }
            Phase::Running | Phase::AlarmRinging => Vec::new(),
        }
    }

    /// Handle one tick from the tick source armed for `epoch`
    pub fn tick(&mut self, epoch: u64) -> Vec<Effect> {
        if self.phase != Phase::Running || epoch != self.epoch {
            debug!("Dropping stale tick (epoch {}, current {})", epoch, self.epoch);
            return Vec::new();
        }

        self.remaining = self.remaining.saturating_sub(1);
        let mut effects = vec![Effect::Render(to_parts(self.remaining))];
        if self.remaining > 0 {
            return effects;
        }

        effects.push(Effect::StopTicking);
        if self.sound_enabled {
            info!("Countdown finished, ringing alarm");
            self.phase = Phase::AlarmRinging;
            effects.push(Effect::PlayAlarm { looped: true });
        } else {
            info!("Countdown finished silently");
            self.phase = Phase::Finished;
        }
        effects
    }

    pub fn pause(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Running {
            return Vec::new();
        }
        info!("Pausing countdown at {}", to_parts(self.remaining));
        self.phase = Phase::Paused;
        vec![Effect::StopTicking]
    }

    /// Return to Initial with a zeroed display from any phase
    pub fn reset(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        match self.phase {
            Phase::Running => effects.push(Effect::StopTicking),
            Phase::AlarmRinging => effects.push(Effect::SilenceAlarm),
            _ => {}
        }
        info!("Resetting countdown");
        self.remaining = 0;
        self.last_set_time = 0;
        self.phase = Phase::Initial;
        effects.push(Effect::Render(TimeParts::zero()));
        effects
    }

    /// Silence a ringing alarm; the display goes back to the last set time
    pub fn stop_alarm(&mut self) -> Vec<Effect> {
        if self.phase != Phase::AlarmRinging {
            return Vec::new();
        }
        info!("Alarm stopped");
        self.phase = Phase::Initial;
        self.remaining = self.last_set_time;
        vec![Effect::SilenceAlarm, Effect::Render(to_parts(self.remaining))]
    }

    /// Load a preset duration without starting it
    pub fn apply_preset(&mut self, seconds: u64) -> Vec<Effect> {
        if matches!(self.phase, Phase::Running | Phase::AlarmRinging) {
            return Vec::new();
        }
        info!("Applying preset of {}", to_parts(seconds));
        self.remaining = seconds;
        self.last_set_time = seconds;
        self.phase = Phase::Initial;
        vec![Effect::Render(to_parts(seconds))]
    }

    /// Flip the sound flag; only the next zero crossing sees the change
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        info!("Sound {}", if self.sound_enabled { "enabled" } else { "disabled" });
        self.sound_enabled
    }

    fn enter_running(&mut self) -> Vec<Effect> {
        self.epoch += 1;
        self.phase = Phase::Running;
        vec![
            Effect::Render(to_parts(self.remaining)),
            Effect::StartTicking { epoch: self.epoch },
        ]
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new(true)
    }
}
