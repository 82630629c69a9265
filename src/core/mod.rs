//! Core timer types and clock math.
//!
//! This module contains the pure functional core of the service:
//! - Timer lifecycle states via [`TimerState`]
//! - Guard predicates for sub-command preconditions
//! - Timer and board values with lazily computed elapsed time
//!
//! Nothing here performs I/O or reads the clock on its own; callers pass
//! `now` in explicitly.

mod guard;
mod state;
mod timer;

pub use guard::{can_pause, can_start, Guard};
pub use state::TimerState;
pub use timer::{effective_elapsed, Board, Timer, DEFAULT_LABEL};
pub(crate) use timer::millis_between;
