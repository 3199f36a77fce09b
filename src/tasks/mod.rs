//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod console_display;
pub mod ticker;

// Re-export main functions
pub use console_display::console_display_task;
pub use ticker::{ticker_task, TickerCommand, TICK_PERIOD};
