//! Guard predicates for timer sub-commands.
//!
//! Guards are pure boolean functions that decide whether a sub-command may
//! act on a timer. A guard that rejects turns the sub-command into a no-op.

use super::timer::Timer;
use super::state::TimerState;
use std::marker::PhantomData;

/// Pure predicate over a subject, usually a [`Timer`].
///
/// # Example
///
/// ```rust
/// use timerboard::core::{Guard, TimerState};
///
/// let not_finished = Guard::new(|s: &TimerState| !s.is_final());
///
/// assert!(not_finished.check(&TimerState::Idle));
/// assert!(not_finished.check(&TimerState::Running));
/// assert!(!not_finished.check(&TimerState::Finished));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows the subject through.
    pub fn check(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }
}

/// Guard for `start`: only idle and paused timers may start.
pub fn can_start() -> Guard<Timer> {
    Guard::new(|t: &Timer| matches!(t.state, TimerState::Idle | TimerState::Paused))
}

/// Guard for `pause`: the timer must be running with a resume point.
pub fn can_pause() -> Guard<Timer> {
    Guard::new(|t: &Timer| t.state.is_running() && t.started_at.is_some())
}
