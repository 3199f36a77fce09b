//! Countdown Timer - A state-managed HTTP countdown timer
//!
//! This library provides a countdown state machine with presets, a
//! looping alarm, sound and theme toggles, and an HTTP API to drive it.

pub mod api;
pub mod audio;
pub mod codec;
pub mod config;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
