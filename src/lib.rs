//! Timerboard: named countdown/stopwatch timers grouped into boards.
//!
//! Timerboard follows a "pure core, imperative shell" layout. The core state
//! engine is a set of pure functions over a [`Board`] and a [`Command`]; the
//! shell loads and saves boards in a key-value store and exposes them over
//! HTTP.
//!
//! Timers never tick. A running timer stores when it last resumed, and its
//! progress is recomputed from the wall clock whenever it is read or
//! commanded.
//!
//! # Core Concepts
//!
//! - **Timer**: four-state lifecycle (`idle`, `running`, `paused`, `finished`)
//! - **Board**: ordered timers under a caller-chosen id
//! - **Engine**: [`apply_command`] maps a board and a command to a new board
//! - **Store**: `board:<id>` keys holding board JSON
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use serde_json::json;
//! use timerboard::{apply_command, Board, Command, TimerState};
//!
//! let t0 = Utc::now();
//! let create = Command::from_value(&json!({
//!     "action": "create",
//!     "payload": { "label": "Tea", "durationMs": 5000 }
//! }));
//! let (board, _) = apply_command(Board::empty("kitchen"), &create, t0);
//! let id = board.timers[0].id.clone();
//!
//! let start = Command::from_value(&json!({
//!     "action": "command",
//!     "payload": { "id": id, "command": "start" }
//! }));
//! let (board, _) = apply_command(board, &start, t0);
//!
//! let timer = &board.timers[0];
//! assert_eq!(timer.state, TimerState::Running);
//! assert_eq!(timer.effective_elapsed(t0 + Duration::seconds(2)), 2000);
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod engine;
pub mod store;

// Re-export commonly used types
pub use self::core::{effective_elapsed, Board, Timer, TimerState};
pub use engine::{apply_command, Command, Outcome, TimerCommand};
pub use store::{BoardStore, MemoryStore, RedbStore, StoreError};
