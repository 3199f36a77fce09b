//! State management module
//!
//! This module contains the countdown state machine and the controller
//! that owns it.

pub mod app_state;
pub mod phase;
pub mod preset;
pub mod session;
pub mod theme;

// Re-export main types
pub use app_state::{AppState, TimeFields, TimerStatus};
pub use phase::{Controls, Phase};
pub use preset::Preset;
pub use session::{Effect, SessionSnapshot, TimerSession};
pub use theme::Theme;
