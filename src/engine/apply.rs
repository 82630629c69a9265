//! Applying commands to a board.

use crate::core::{can_pause, can_start, millis_between, Board, Timer, TimerState};
use crate::engine::command::{Command, CreateTimer, TimerCommand};
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// What a command did to the board. Informational only; the returned board
/// is the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new idle timer was appended
    Created { id: String },

    /// A sub-command moved the timer to a different state
    Transitioned {
        id: String,
        from: TimerState,
        to: TimerState,
    },

    /// The timer was targeted but kept its state (its `updatedAt` still moves)
    Unchanged { id: String, state: TimerState },

    /// The timer was removed
    Deleted { id: String },

    /// No timer on the board has this id
    NotFound { id: String },

    /// The command was not actionable
    Ignored { reason: String },
}

/// The engine's notion of "now": wall clock truncated to milliseconds, the
/// precision of the wire format.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Apply a command to a board as of `now`.
///
/// Never fails: unknown actions, missing targets and unrecognized
/// sub-commands leave the board as it was.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use timerboard::core::{Board, TimerState};
/// use timerboard::engine::{apply_command, Command, CreateTimer, TimerCommand};
///
/// let t0 = Utc::now();
/// let create = Command::Create(CreateTimer { label: "Tea".into(), duration_ms: 5000 });
/// let (board, _) = apply_command(Board::empty("kitchen"), &create, t0);
/// let id = board.timers[0].id.clone();
///
/// let start = Command::Control { id: id.clone(), command: TimerCommand::Start };
/// let (board, _) = apply_command(board, &start, t0);
///
/// let pause = Command::Control { id, command: TimerCommand::Pause };
/// let (board, _) = apply_command(board, &pause, t0 + Duration::milliseconds(6000));
///
/// let timer = &board.timers[0];
/// assert_eq!(timer.state, TimerState::Finished);
/// assert_eq!(timer.elapsed_ms, 5000);
/// assert!(timer.started_at.is_none());
/// ```
pub fn apply_command(mut board: Board, command: &Command, now: DateTime<Utc>) -> (Board, Outcome) {
    let outcome = match command {
        Command::Create(create) => create_timer(&mut board, create, now),
        Command::Control { id, command } => control_timer(&mut board, id, command, now),
        Command::Delete { id } => delete_timer(&mut board, id),
        Command::Ignored { reason, .. } => Outcome::Ignored {
            reason: (*reason).to_string(),
        },
    };
    (board, outcome)
}

/// Apply a command using a single freshly captured [`now`].
pub fn apply_command_now(board: Board, command: &Command) -> (Board, Outcome) {
    apply_command(board, command, now())
}

fn create_timer(board: &mut Board, create: &CreateTimer, now: DateTime<Utc>) -> Outcome {
    let id = Uuid::new_v4().to_string();
    board.timers.push(Timer::new(
        id.clone(),
        create.label.clone(),
        create.duration_ms,
        now,
    ));
    Outcome::Created { id }
}

fn control_timer(
    board: &mut Board,
    id: &str,
    command: &TimerCommand,
    now: DateTime<Utc>,
) -> Outcome {
    let Some(index) = board.timers.iter().position(|t| t.id == id) else {
        return Outcome::NotFound { id: id.to_string() };
    };
    let timer = &mut board.timers[index];
    let from = timer.state;

    transition(timer, command, now);
    settle(timer, now);
    timer.updated_at = now;

    if timer.state == from {
        Outcome::Unchanged {
            id: id.to_string(),
            state: from,
        }
    } else {
        Outcome::Transitioned {
            id: id.to_string(),
            from,
            to: timer.state,
        }
    }
}

fn delete_timer(board: &mut Board, id: &str) -> Outcome {
    match board.timers.iter().position(|t| t.id == id) {
        Some(index) => {
            board.timers.remove(index);
            Outcome::Deleted { id: id.to_string() }
        }
        None => Outcome::NotFound { id: id.to_string() },
    }
}

/// Run the state-machine transition for a sub-command.
fn transition(timer: &mut Timer, command: &TimerCommand, now: DateTime<Utc>) {
    match command {
        TimerCommand::Start => {
            if can_start().check(timer) {
                timer.started_at = Some(now);
                timer.state = TimerState::Running;
            }
        }
        TimerCommand::Pause => {
            if can_pause().check(timer) {
                if let Some(started_at) = timer.started_at.take() {
                    timer.elapsed_ms = timer
                        .elapsed_ms
                        .saturating_add(millis_between(started_at, now));
                }
                timer.state = TimerState::Paused;
            }
        }
        TimerCommand::Reset => {
            timer.elapsed_ms = 0;
            timer.started_at = None;
            timer.state = TimerState::Idle;
        }
        TimerCommand::Unknown(_) => {}
    }
}

/// Auto-finish: once accrued time reaches the duration the timer is finished
/// with its elapsed time clamped to the duration.
fn settle(timer: &mut Timer, now: DateTime<Utc>) {
    if timer.effective_elapsed(now) >= timer.duration_ms {
        timer.state = TimerState::Finished;
        timer.started_at = None;
        timer.elapsed_ms = timer.duration_ms;
    }
}
