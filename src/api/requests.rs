//! API request bodies

use serde::Deserialize;
use serde_json::Value;

use crate::state::TimeFields;

/// Time fields as sent by a client. Each field may be a number, a
/// string, null or absent; all of them end up as raw field text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeInput {
    #[serde(default)]
    pub hours: Value,
    #[serde(default)]
    pub minutes: Value,
    #[serde(default)]
    pub seconds: Value,
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<TimeInput> for TimeFields {
    fn from(input: TimeInput) -> Self {
        Self {
            hours: field_text(&input.hours),
            minutes: field_text(&input.minutes),
            seconds: field_text(&input.seconds),
        }
    }
}
