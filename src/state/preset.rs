//! Named preset durations

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A shortcut that loads a fixed duration without starting it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub label: String,
    pub seconds: u64,
}

impl Preset {
    pub fn new(label: &str, seconds: u64) -> Self {
        Self {
            label: label.to_string(),
            seconds,
        }
    }

    /// Presets offered when none are configured
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("1 min", 60),
            Self::new("5 min", 5 * 60),
            Self::new("10 min", 10 * 60),
            Self::new("15 min", 15 * 60),
            Self::new("30 min", 30 * 60),
        ]
    }
}

/// Parses `LABEL=SECONDS`
impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, seconds) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("Preset '{}' must look like LABEL=SECONDS", s))?;

        let label = label.trim();
        if label.is_empty() {
            return Err(format!("Preset '{}' has an empty label", s));
        }

        let seconds = seconds
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Preset '{}' has an invalid duration: {}", s, e))?;

        Ok(Self::new(label, seconds))
    }
}
