//! Conversion between a second count and the hours/minutes/seconds fields

use std::fmt;

use serde::{Deserialize, Serialize};

/// A duration split into display fields. Hours are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeParts {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Split a second count into hours, minutes and seconds
pub fn to_parts(total_seconds: u64) -> TimeParts {
    TimeParts {
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
    }
}

/// Combine three raw field values into a second count.
///
/// Fields are parsed with [`parse_field`], so garbage becomes 0 and
/// negative values are carried through rather than clamped.
pub fn to_seconds(hours: &str, minutes: &str, seconds: &str) -> i64 {
    parse_field(hours)
        .saturating_mul(3600)
        .saturating_add(parse_field(minutes).saturating_mul(60))
        .saturating_add(parse_field(seconds))
}

/// Leniently parse one time field.
///
/// Accepts leading whitespace, an optional sign and a run of digits;
/// anything after the digits is ignored. Empty or non-numeric input is 0.
pub fn parse_field(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    for digit in digits {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if negative { -value } else { value }
}
