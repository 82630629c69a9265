//! Board commands decoded from client payloads.
//!
//! Decoding never fails. Anything the engine cannot act on becomes
//! [`Command::Ignored`], which applies as an explicit no-op.

use crate::core::DEFAULT_LABEL;
use serde_json::Value;

/// Payload of a `create` action after defaults are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateTimer {
    pub label: String,
    pub duration_ms: u64,
}

impl Default for CreateTimer {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            duration_ms: 0,
        }
    }
}

/// Sub-command carried by a `command` action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Reset,
    /// Unrecognized sub-command; only the auto-finish check runs.
    Unknown(String),
}

impl TimerCommand {
    pub fn parse(name: &str) -> Self {
        match name {
            "start" => Self::Start,
            "pause" => Self::Pause,
            "reset" => Self::Reset,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A board command, tagged on the wire by `action` with a nested `payload`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use timerboard::engine::{Command, CreateTimer, TimerCommand};
///
/// let create = Command::from_value(&json!({
///     "action": "create",
///     "payload": { "label": "Tea", "durationMs": 5000 }
/// }));
/// assert_eq!(
///     create,
///     Command::Create(CreateTimer { label: "Tea".into(), duration_ms: 5000 })
/// );
///
/// let start = Command::from_value(&json!({
///     "action": "command",
///     "payload": { "id": "abc", "command": "start" }
/// }));
/// assert_eq!(
///     start,
///     Command::Control { id: "abc".into(), command: TimerCommand::Start }
/// );
///
/// let other = Command::from_value(&json!({ "action": "explode" }));
/// assert!(matches!(other, Command::Ignored { .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Create(CreateTimer),
    Control { id: String, command: TimerCommand },
    Delete { id: String },
    /// Unknown action or a targeted action missing its target.
    Ignored { action: String, reason: &'static str },
}

impl Command {
    /// Decode a command from an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        let Some(action) = value.get("action").and_then(Value::as_str) else {
            return Self::Ignored {
                action: String::new(),
                reason: "missing action",
            };
        };
        let payload = value.get("payload").unwrap_or(&Value::Null);

        match action {
            "create" => Self::Create(CreateTimer {
                label: decode_label(payload.get("label")),
                duration_ms: decode_duration(payload.get("durationMs")),
            }),
            "command" => {
                let Some(id) = decode_id(payload) else {
                    return Self::ignored(action, "missing timer id");
                };
                match payload.get("command").and_then(Value::as_str) {
                    Some(name) => Self::Control {
                        id,
                        command: TimerCommand::parse(name),
                    },
                    None => Self::ignored(action, "missing timer command"),
                }
            }
            "delete" => match decode_id(payload) {
                Some(id) => Self::Delete { id },
                None => Self::ignored(action, "missing timer id"),
            },
            _ => Self::ignored(action, "unknown action"),
        }
    }

    /// The wire `action` tag for this command.
    pub fn action(&self) -> &str {
        match self {
            Self::Create(_) => "create",
            Self::Control { .. } => "command",
            Self::Delete { .. } => "delete",
            Self::Ignored { action, .. } => action,
        }
    }

    fn ignored(action: &str, reason: &'static str) -> Self {
        Self::Ignored {
            action: action.to_string(),
            reason,
        }
    }
}

fn decode_label(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => DEFAULT_LABEL.to_string(),
    }
}

/// Coerce a duration to whole non-negative milliseconds; anything that is not
/// a usable number becomes 0.
fn decode_duration(value: Option<&Value>) -> u64 {
    let millis = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match millis {
        Some(ms) if ms.is_finite() && ms > 0.0 => ms.floor() as u64,
        _ => 0,
    }
}

fn decode_id(payload: &Value) -> Option<String> {
    payload
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
}
