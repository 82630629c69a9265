//! Timer state engine.
//!
//! Pure functions from a board and a command to a new board. The only clock
//! read is the single `now` captured per command by [`apply_command_now`];
//! [`apply_command`] takes it as an argument so the same math can be replayed
//! at any instant.
//!
//! # Key Concepts
//!
//! - **Commands**: closed set of actions decoded leniently from JSON
//! - **Transitions**: `start`, `pause` and `reset`, gated by guards
//! - **Auto-finish**: evaluated after every sub-command, clamping elapsed time

mod apply;
mod command;

pub use apply::{apply_command, apply_command_now, now, Outcome};
pub use command::{Command, CreateTimer, TimerCommand};
