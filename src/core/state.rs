//! Timer lifecycle states.
//!
//! A timer is always in exactly one of four states. The inspectors here are
//! pure and never look at the clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a single timer.
///
/// Serialized in lowercase (`"idle"`, `"running"`, `"paused"`, `"finished"`)
/// to match the board wire format.
///
/// # Example
///
/// ```rust
/// use timerboard::core::TimerState;
///
/// let state = TimerState::Running;
/// assert_eq!(state.name(), "running");
/// assert!(state.is_running());
/// assert!(!state.is_final());
///
/// let json = serde_json::to_string(&TimerState::Finished).unwrap();
/// assert_eq!(json, "\"finished\"");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Created or reset, no accrued time.
    #[default]
    Idle,
    /// Accruing time since `startedAt`.
    Running,
    /// Accrued time frozen in `elapsedMs`.
    Paused,
    /// Reached its duration. Only `reset` leaves this state.
    Finished,
}

impl TimerState {
    /// Get the state's name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished => "finished",
        }
    }

    /// Check if the timer is currently accruing time.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check if this is the finished state.
    ///
    /// Finished is not absorbing: `reset` always rewinds to idle.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
