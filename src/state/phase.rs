//! Timer phase and the button layout derived from it

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single active phase of a countdown session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Initial,
    Running,
    Paused,
    Finished,
    AlarmRinging,
}

impl Phase {
    /// Which controls should be offered to the user in this phase
    pub fn controls(self) -> Controls {
        Controls {
            start: matches!(self, Phase::Initial | Phase::Paused | Phase::Finished),
            start_label: if self == Phase::Paused { "Resume" } else { "Start" },
            pause: self == Phase::Running,
            reset: self != Phase::AlarmRinging,
            stop_alarm: self == Phase::AlarmRinging,
            alarm_animating: self == Phase::AlarmRinging,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Initial => "initial",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Finished => "finished",
            Phase::AlarmRinging => "alarm_ringing",
        };
        f.write_str(name)
    }
}

/// Button visibility for the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub start: bool,
    pub start_label: &'static str,
    pub pause: bool,
    pub reset: bool,
    pub stop_alarm: bool,
    /// Whether the ringing animation should loop
    pub alarm_animating: bool,
}
