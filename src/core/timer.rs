//! Timer and board values.
//!
//! Progress is never advanced by a background process. A running timer only
//! stores the instant it last resumed (`started_at`) plus the time it had
//! accrued before that (`elapsed_ms`); everything else is derived from the
//! wall clock at read time.

use super::state::TimerState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label given to timers created without one.
pub const DEFAULT_LABEL: &str = "Timer";

/// A single countdown/stopwatch timer.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use timerboard::core::{Timer, TimerState};
///
/// let created = Utc::now();
/// let mut timer = Timer::new("t-1".into(), "Tea".into(), 5000, created);
/// assert_eq!(timer.state, TimerState::Idle);
///
/// timer.state = TimerState::Running;
/// timer.started_at = Some(created);
/// let later = created + Duration::milliseconds(1500);
/// assert_eq!(timer.effective_elapsed(later), 1500);
/// assert_eq!(timer.remaining(later), 3500);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: String,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub state: TimerState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Most recent resume point. Set exactly while `state` is running.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// Active time accrued before `started_at`.
    #[serde(default)]
    pub elapsed_ms: u64,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Timer {
    /// Create an idle timer with no accrued time.
    pub fn new(id: String, label: String, duration_ms: u64, now: DateTime<Utc>) -> Self {
        Self {
            id,
            label,
            duration_ms,
            state: TimerState::Idle,
            created_at: now,
            updated_at: now,
            started_at: None,
            elapsed_ms: 0,
        }
    }

    /// Active time accrued as of `now`. See [`effective_elapsed`].
    pub fn effective_elapsed(&self, now: DateTime<Utc>) -> u64 {
        effective_elapsed(self, now)
    }

    /// Time left until the duration is reached, saturating at zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> u64 {
        self.duration_ms.saturating_sub(self.effective_elapsed(now))
    }
}

/// Compute a timer's accrued active time as of `now`.
///
/// Running timers add the time since their last resume point to the stored
/// `elapsed_ms`; every other state reports `elapsed_ms` as stored. This is
/// recomputed on every call and must never be cached.
pub fn effective_elapsed(timer: &Timer, now: DateTime<Utc>) -> u64 {
    match (timer.state, timer.started_at) {
        (TimerState::Running, Some(started_at)) => {
            timer.elapsed_ms.saturating_add(millis_between(started_at, now))
        }
        _ => timer.elapsed_ms,
    }
}

/// Whole milliseconds from `start` to `end`, clamped at zero when the clock
/// went backwards.
pub(crate) fn millis_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    end.signed_duration_since(start).num_milliseconds().max(0) as u64
}

/// An ordered collection of timers addressed by a caller-chosen id.
///
/// Timer order is creation order; deleting a timer never reorders the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub board_id: String,
    #[serde(default)]
    pub timers: Vec<Timer>,
}

impl Board {
    /// A board with no timers. Used for unknown and unreadable boards.
    pub fn empty(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            timers: Vec::new(),
        }
    }
}
