//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::{Preset, Theme};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timer")]
#[command(about = "A state-managed HTTP countdown timer with presets and a looping alarm")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with the alarm sound disabled
    #[arg(long)]
    pub mute: bool,

    /// Start in the dark theme
    #[arg(long)]
    pub dark: bool,

    /// Shell command played in a loop as the alarm (terminal bell if unset)
    #[arg(long, value_name = "CMD")]
    pub alarm_command: Option<String>,

    /// Preset as LABEL=SECONDS; repeat for several
    #[arg(long = "preset", value_name = "LABEL=SECONDS")]
    pub presets: Vec<Preset>,

    /// Draw the countdown on stdout
    #[arg(long)]
    pub console: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn theme(&self) -> Theme {
        if self.dark { Theme::Dark } else { Theme::Light }
    }

    /// Configured presets, or the defaults when none were given
    pub fn presets(&self) -> Vec<Preset> {
        if self.presets.is_empty() {
            Preset::defaults()
        } else {
            self.presets.clone()
        }
    }
}
